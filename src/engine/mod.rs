//! Движок раздачи: раунды ставок, очередность ходов, переходы улиц,
//! сайд-поты и расчёт на шоудауне.
//!
//! Состояние раздачи: `Hand`.
//! Основные операции:
//!   - `start_hand` — начать раздачу (блайнды, карманные карты)
//!   - `apply_action` — применить действие игрока
//!   - `advance_street` — закрыть раунд и открыть следующую улицу
//!   - `settle_showdown` — разовый расчёт и выплата банка

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod settlement;
pub mod side_pots;
pub mod turn;
pub mod validation;

pub use actions::Action;
pub use betting::BettingRound;
pub use errors::EngineError;
pub use game_loop::{advance_street, apply_action, start_hand, Hand};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use settlement::settle_showdown;
pub use side_pots::{compute_side_pots, SidePot};
pub use turn::{process_turn, TurnResult};

/// Интерфейс RNG для движка. Реализации — в `infra::rng`.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
