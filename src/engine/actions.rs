use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Действие игрока. Закрытый набор вариантов: компилятор проверяет,
/// что обработаны все.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    /// Открывающая ставка на улице без текущей ставки. Значение —
    /// целевой суммарный вклад в раунде.
    Bet(Chips),
    /// Повышение. Значение — новый *суммарный* вклад в раунде,
    /// не прибавка.
    Raise(Chips),
    /// Весь остаток кошелька.
    AllIn,
}
