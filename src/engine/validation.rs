use crate::domain::player::Player;
use crate::engine::actions::Action;
use crate::engine::betting::BettingRound;
use crate::engine::errors::EngineError;

/// Проверка, допустимо ли действие при текущем состоянии раунда.
/// Только легальность формы: хватает ли фишек, проверяет сам трекер
/// ставок при применении. При ошибке раздача не меняется.
pub fn validate_action(
    player: &Player,
    action: &Action,
    betting: &BettingRound,
) -> Result<(), EngineError> {
    if !player.can_act() {
        return Err(EngineError::IllegalAction);
    }

    let due = betting.current_bet.saturating_sub(player.round_contribution);

    match action {
        Action::Fold => Ok(()),

        Action::Check => {
            if due.is_zero() {
                Ok(())
            } else {
                Err(EngineError::CannotCheck)
            }
        }

        Action::Call => {
            if due.is_zero() {
                Err(EngineError::CannotCall)
            } else {
                Ok(())
            }
        }

        Action::Bet(total) => {
            if !betting.current_bet.is_zero() {
                // Ставка уже есть — это raise, а не bet.
                return Err(EngineError::IllegalAction);
            }
            if *total < betting.min_raise {
                return Err(EngineError::BetTooSmall);
            }
            Ok(())
        }

        Action::Raise(total) => {
            if betting.current_bet.is_zero() {
                // Ставки нет — это bet, а не raise.
                return Err(EngineError::IllegalAction);
            }
            if *total <= betting.current_bet {
                return Err(EngineError::IllegalAction);
            }
            if total.saturating_sub(betting.current_bet) < betting.min_raise {
                return Err(EngineError::RaiseTooSmall);
            }
            Ok(())
        }

        // All-in допустим всегда, даже с пустым кошельком: так хост
        // принудительно доигрывает за игрока без фишек.
        Action::AllIn => Ok(()),
    }
}
