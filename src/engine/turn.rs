use crate::domain::SeatIndex;
use crate::engine::game_loop::Hand;

/// Куда двигаться после очередного действия.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnResult {
    /// Раунд продолжается, ход у этого места. Если у игрока пустой
    /// кошелёк, хост обязан прислать за него AllIn, а не ждать ввода.
    ContinueRound(SeatIndex),
    /// Раунд ставок закрыт — дальше `advance_street`.
    EndRound,
    /// Претендентов на банк максимум один — сразу `settle_showdown`.
    EndHand,
}

/// Решение машины ходов по текущему состоянию раздачи.
pub fn process_turn(hand: &Hand) -> TurnResult {
    if hand.settled || hand.contender_count() <= 1 {
        return TurnResult::EndHand;
    }
    if hand.betting.is_round_closed(&hand.players) {
        return TurnResult::EndRound;
    }
    match hand.acting {
        Some(seat) => TurnResult::ContinueRound(seat),
        // Открытый раунд без актёра — нарушенный инвариант;
        // деградируем в закрытие раунда, процесс не роняем.
        None => TurnResult::EndRound,
    }
}
