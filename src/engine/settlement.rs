use crate::domain::chips::Chips;
use crate::domain::hand::{Payout, Street};
use crate::domain::SeatIndex;
use crate::engine::errors::EngineError;
use crate::engine::game_loop::Hand;
use crate::engine::hand_history::HandEventKind;
use crate::engine::side_pots::{compute_side_pots, contribution_ledger};
use crate::eval::{BestFive, HandEvaluator, Score};

/// Разовый расчёт раздачи: сайд-поты, победители, выплаты.
///
/// Единственная точка, где вклады игроков гасятся из учёта: банк
/// обязан разойтись по кошелькам ровно в ноль. Повторный вызов —
/// `HandAlreadySettled`; вызов при незакрытой торговле —
/// `BettingStillOpen`. Если претендент один (остальные сфолдили),
/// оценщик не вызывается вовсе.
pub fn settle_showdown<E: HandEvaluator>(
    hand: &mut Hand,
    evaluator: &E,
) -> Result<Vec<Payout>, EngineError> {
    if hand.settled {
        return Err(EngineError::HandAlreadySettled);
    }
    let contenders = hand.contender_count();
    if contenders == 0 {
        return Err(EngineError::Internal("раздача без претендентов"));
    }
    if contenders > 1 && hand.street != Street::Showdown {
        return Err(EngineError::BettingStillOpen);
    }

    // Недособранные вклады текущего раунда — в банк.
    hand.collect_round_contributions();

    // Закон сохранения на входе: банк == сумма вкладов.
    let expected: Chips = hand.players.iter().map(|p| p.total_contribution).sum();
    if expected != hand.pot {
        log::error!(
            "раздача {}: банк {} не сходится с вкладами {}; реестр: {}",
            hand.hand_id,
            hand.pot,
            expected,
            contribution_ledger(&hand.players)
        );
        return Err(EngineError::ChipConservation {
            expected,
            actual: hand.pot,
        });
    }

    let payouts = if contenders == 1 {
        fold_to_one(hand)?
    } else {
        showdown(hand, evaluator)?
    };

    // Закон сохранения на выходе: банк разошёлся без остатка.
    let paid: Chips = payouts.iter().map(|p| p.amount).sum();
    if paid != hand.pot {
        log::error!(
            "раздача {}: выплачено {} из банка {}; реестр: {}",
            hand.hand_id,
            paid,
            hand.pot,
            contribution_ledger(&hand.players)
        );
        return Err(EngineError::ChipConservation {
            expected: hand.pot,
            actual: paid,
        });
    }

    for payout in &payouts {
        if payout.amount.is_zero() {
            continue;
        }
        hand.players[payout.seat].wallet.credit(payout.amount);
        hand.history.push(HandEventKind::PotAwarded {
            seat: payout.seat,
            player_id: payout.player_id,
            amount: payout.amount,
        });
        log::debug!(
            "раздача {}: выплата {} игроку {}",
            hand.hand_id,
            payout.amount,
            payout.player_id
        );
    }

    // Вклады погашены выплатой.
    for p in hand.players.iter_mut() {
        p.round_contribution = Chips::ZERO;
        p.total_contribution = Chips::ZERO;
    }
    hand.pot = Chips::ZERO;
    hand.street = Street::Showdown;
    hand.settled = true;
    hand.acting = None;
    hand.history.push(HandEventKind::HandSettled {
        hand_id: hand.hand_id,
    });

    Ok(payouts)
}

/// Все сфолдили: единственный претендент забирает весь банк,
/// без вскрытия и без оценщика.
fn fold_to_one(hand: &Hand) -> Result<Vec<Payout>, EngineError> {
    let seat = hand
        .players
        .iter()
        .position(|p| p.is_in_hand())
        .ok_or(EngineError::Internal("раздача без претендентов"))?;
    Ok(vec![Payout {
        player_id: hand.players[seat].player_id,
        seat,
        best_five: None,
        amount: hand.pot,
    }])
}

/// Шоудаун: оценить не сфолдивших, разобрать поты от главного к
/// верхним, поделить каждый между лучшими из его претендентов.
fn showdown<E: HandEvaluator>(hand: &mut Hand, evaluator: &E) -> Result<Vec<Payout>, EngineError> {
    let pots = compute_side_pots(&hand.players)?;

    // Оценка каждого претендента — ровно один раз, до разбора потов.
    let mut scored: Vec<Option<(Score, BestFive)>> = vec![None; hand.players.len()];
    for seat in 0..hand.players.len() {
        if !hand.players[seat].is_in_hand() {
            continue;
        }
        let (score, best) = evaluator.evaluate(&hand.players[seat].hole_cards, &hand.board);
        scored[seat] = Some((score, best));
        hand.history.push(HandEventKind::ShowdownReveal {
            seat,
            player_id: hand.players[seat].player_id,
            hole_cards: hand.players[seat].hole_cards.clone(),
            score,
        });
    }

    // Нечётные фишки при сплите — по кругу от соседа дилера слева:
    // чем раньше место в этом порядке, тем раньше лишняя фишка.
    let n = hand.players.len();
    let dealer = hand.dealer;
    let order_key = |seat: SeatIndex| (seat + n - dealer - 1) % n;

    let mut won = vec![Chips::ZERO; n];
    for pot in &pots {
        let best = pot
            .eligible
            .iter()
            .filter_map(|&s| scored[s].map(|(score, _)| score))
            .max()
            .ok_or(EngineError::Internal("пот без живых претендентов"))?;
        let mut winners: Vec<SeatIndex> = pot
            .eligible
            .iter()
            .copied()
            .filter(|&s| scored[s].map(|(score, _)| score == best).unwrap_or(false))
            .collect();
        winners.sort_by_key(|&s| order_key(s));

        let (share, remainder) = pot.amount.split(winners.len() as u64);
        for (i, &seat) in winners.iter().enumerate() {
            let mut prize = share;
            if (i as u64) < remainder.0 {
                prize += Chips(1);
            }
            won[seat] += prize;
        }
    }

    let payouts = hand
        .players
        .iter()
        .enumerate()
        .filter_map(|(seat, p)| {
            scored[seat].map(|(_, best)| Payout {
                player_id: p.player_id,
                seat,
                best_five: Some(best),
                amount: won[seat],
            })
        })
        .collect();
    Ok(payouts)
}
