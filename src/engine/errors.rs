use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::wallet::WalletError;
use crate::domain::PlayerId;

/// Ошибки движка раздачи.
///
/// Классы (подробнее в DESIGN.md):
/// - `InsufficientFunds` — восстановимая: вызывающий заменяет действие
///   на all-in;
/// - недопустимые действия (`NotPlayersTurn`..`IllegalAction`) —
///   состояние раздачи не меняется;
/// - недопустимые переходы (`HandAlreadySettled`..`Internal`) — класс
/// ошибок программирования, гибнет только текущая раздача;
/// - `ChipConservation` — фатальна для раздачи, всегда логируется
///   с полным реестром вкладов.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("недостаточно фишек: нужно {needed}, доступно {available}")]
    InsufficientFunds { needed: Chips, available: Chips },

    #[error("сейчас не ход игрока {0}")]
    NotPlayersTurn(PlayerId),

    #[error("игрок {0} не участвует в раздаче")]
    PlayerNotInHand(PlayerId),

    #[error("check невозможен: есть неуравненная ставка")]
    CannotCheck,

    #[error("call невозможен: нечего уравнивать")]
    CannotCall,

    #[error("bet меньше минимального")]
    BetTooSmall,

    #[error("размер рейза меньше минимального")]
    RaiseTooSmall,

    #[error("недопустимое действие в текущем состоянии раздачи")]
    IllegalAction,

    #[error("недостаточно игроков для раздачи")]
    NotEnoughPlayers,

    #[error("некорректные ставки стола: {0}")]
    InvalidStakes(String),

    #[error("раздача уже рассчитана")]
    HandAlreadySettled,

    #[error("раунд ставок ещё не закрыт")]
    BettingStillOpen,

    #[error("нет следующей улицы после {0:?}")]
    NoSuchStreet(Street),

    #[error("нарушение сохранения фишек: ожидалось {expected}, получено {actual}")]
    ChipConservation { expected: Chips, actual: Chips },

    #[error("внутренняя ошибка движка: {0}")]
    Internal(&'static str),
}

impl From<WalletError> for EngineError {
    fn from(e: WalletError) -> Self {
        match e {
            WalletError::InsufficientFunds { needed, available } => {
                EngineError::InsufficientFunds { needed, available }
            }
        }
    }
}
