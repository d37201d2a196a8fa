//! Тесты ошибочных путей движка: недопустимые переходы, действия после
//! расчёта, некорректный старт раздачи.

use holdem_engine::domain::{Card, Chips, Player, Stakes, Wallet};
use holdem_engine::engine::{
    advance_street, apply_action, settle_showdown, start_hand, Action, EngineError, Hand,
};
use holdem_engine::eval::{BestFive, HandEvaluator, Score};
use holdem_engine::infra::{DeterministicRng, InMemoryWallet};

fn wallet(amount: u64) -> Box<dyn Wallet> {
    Box::new(InMemoryWallet::new(Chips(amount)))
}

fn make_players(stacks: &[u64]) -> Vec<Player> {
    stacks
        .iter()
        .enumerate()
        .map(|(seat, &stack)| {
            Player::new(seat as u64 + 1, format!("p{}", seat + 1), wallet(stack))
        })
        .collect()
}

fn start(stacks: &[u64]) -> Hand {
    let mut rng = DeterministicRng::from_seed(5);
    start_hand(
        make_players(stacks),
        Stakes::new(Chips(50), Chips(100)),
        &mut rng,
        1,
    )
    .expect("start_hand должен запустить раздачу")
}

fn pid(seat: usize) -> u64 {
    seat as u64 + 1
}

/// Оценщик-заглушка: всем одинаково.
struct FlatEvaluator;

impl HandEvaluator for FlatEvaluator {
    fn evaluate(&self, _hole_cards: &[Card], board: &[Card]) -> (Score, BestFive) {
        (Score(1), [board[0], board[1], board[2], board[3], board[4]])
    }
}

//
// ====================== СТАРТ РАЗДАЧИ ======================
//

#[test]
fn start_hand_requires_two_players() {
    let mut rng = DeterministicRng::from_seed(5);
    let err = start_hand(
        make_players(&[10_000]),
        Stakes::new(Chips(50), Chips(100)),
        &mut rng,
        1,
    )
    .expect_err("одному играть не с кем");
    assert!(matches!(err, EngineError::NotEnoughPlayers));
}

#[test]
fn start_hand_rejects_invalid_stakes() {
    let mut rng = DeterministicRng::from_seed(5);
    let err = start_hand(
        make_players(&[10_000, 10_000]),
        Stakes::new(Chips(200), Chips(100)),
        &mut rng,
        1,
    )
    .expect_err("BB меньше SB");
    assert!(matches!(err, EngineError::InvalidStakes(_)));
}

//
// ====================== ПЕРЕХОДЫ ======================
//

/// Улицу нельзя открыть при незакрытой торговле.
#[test]
fn advance_with_open_betting_is_rejected() {
    let mut hand = start(&[10_000; 3]);

    let err = advance_street(&mut hand).expect_err("префлоп ещё торгуется");
    assert!(matches!(err, EngineError::BettingStillOpen));
}

/// После шоудауна улиц больше нет.
#[test]
fn advance_past_showdown_is_rejected() {
    let mut hand = start(&[5_000, 5_000]);
    apply_action(&mut hand, pid(0), Action::AllIn).expect("all-in");
    apply_action(&mut hand, pid(1), Action::AllIn).expect("all-in");

    for _ in 0..4 {
        advance_street(&mut hand).expect("прогон улиц");
    }

    let err = advance_street(&mut hand).expect_err("дальше шоудауна пути нет");
    assert!(matches!(err, EngineError::NoSuchStreet(_)));
}

/// Расчёт при живой торговле отклоняется.
#[test]
fn settle_with_open_betting_is_rejected() {
    let mut hand = start(&[10_000; 3]);

    let err = settle_showdown(&mut hand, &FlatEvaluator)
        .expect_err("торговля не закончена — расчёта нет");
    assert!(matches!(err, EngineError::BettingStillOpen));
}

//
// ====================== ПОСЛЕ РАСЧЁТА ======================

/// После расчёта раздача мертва: ни действий, ни улиц.
#[test]
fn settled_hand_rejects_everything() {
    let mut hand = start(&[10_000; 3]);
    apply_action(&mut hand, pid(0), Action::Fold).expect("fold");
    apply_action(&mut hand, pid(1), Action::Fold).expect("fold");

    settle_showdown(&mut hand, &FlatEvaluator).expect("fold-to-one расчёт");

    let err = apply_action(&mut hand, pid(2), Action::Check)
        .expect_err("действий после расчёта нет");
    assert!(matches!(err, EngineError::HandAlreadySettled));

    let err = advance_street(&mut hand).expect_err("улиц после расчёта нет");
    assert!(matches!(err, EngineError::HandAlreadySettled));
}

//
// ====================== ФОРМА ДЕЙСТВИЙ ======================
//

/// Raise без существующей ставки — это bet; отклоняется.
#[test]
fn raise_without_bet_is_illegal() {
    let mut hand = start(&[10_000; 3]);
    apply_action(&mut hand, pid(0), Action::Call).expect("call");
    apply_action(&mut hand, pid(1), Action::Call).expect("call");
    apply_action(&mut hand, pid(2), Action::Check).expect("check");
    advance_street(&mut hand).expect("флоп");

    let err = apply_action(&mut hand, pid(1), Action::Raise(Chips(200)))
        .expect_err("на флопе ставки ещё нет");
    assert!(matches!(err, EngineError::IllegalAction));
}

/// Сфолдивший больше не получает хода.
#[test]
fn folded_player_never_acts_again() {
    let mut hand = start(&[10_000; 4]);
    apply_action(&mut hand, pid(3), Action::Fold).expect("fold utg");

    let err = apply_action(&mut hand, pid(3), Action::Call)
        .expect_err("сфолдивший вне очереди навсегда");
    assert!(matches!(err, EngineError::NotPlayersTurn(_)));
}

/// Bet меньше большого блайнда отклоняется.
#[test]
fn bet_below_big_blind_is_rejected() {
    let mut hand = start(&[10_000; 3]);
    apply_action(&mut hand, pid(0), Action::Call).expect("call");
    apply_action(&mut hand, pid(1), Action::Call).expect("call");
    apply_action(&mut hand, pid(2), Action::Check).expect("check");
    advance_street(&mut hand).expect("флоп");

    let err = apply_action(&mut hand, pid(1), Action::Bet(Chips(40)))
        .expect_err("минимальный bet — BB");
    assert!(matches!(err, EngineError::BetTooSmall));
}
