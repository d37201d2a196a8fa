//! Тесты разбиения банка на сайд-поты.
//!
//! Проверяем:
//! - послойное разбиение при неравных all-in;
//! - состав eligible (сфолдившие исключены, их фишки остаются);
//! - игроков с равным вкладом в одном слое;
//! - закон сохранения: сумма потов == сумме вкладов.

use holdem_engine::domain::{Chips, Player, PlayerStatus, SeatIndex, Wallet};
use holdem_engine::engine::side_pots::{compute_side_pots, SidePot};
use holdem_engine::infra::InMemoryWallet;

fn wallet(amount: u64) -> Box<dyn Wallet> {
    Box::new(InMemoryWallet::new(Chips(amount)))
}

/// Утилита: игроки с заданными суммарными вкладами и статусами.
fn make_players(entries: &[(u64, PlayerStatus)]) -> Vec<Player> {
    entries
        .iter()
        .enumerate()
        .map(|(seat, &(total, status))| {
            let mut p = Player::new(seat as u64 + 1, format!("p{}", seat + 1), wallet(1_000));
            p.total_contribution = Chips(total);
            p.status = status;
            p
        })
        .collect()
}

/// Утилита: достать (amount, отсортированные eligible) из пота.
fn pot_info(pot: &SidePot) -> (u64, Vec<SeatIndex>) {
    let mut seats = pot.eligible.clone();
    seats.sort_unstable();
    (pot.amount.0, seats)
}

//
// ====================== ПОСЛОЙНОЕ РАЗБИЕНИЕ ======================
//

/// Опорный вектор: вклады [15, 5, 90, 90].
/// Ожидаем ровно [20, 30, 150]:
/// - слой 5 × 4 участника = 20;
/// - слой 10 × 3 = 30;
/// - слой 75 × 2 = 150.
#[test]
fn side_pots_tiering_15_5_90_90() {
    use PlayerStatus::*;
    let players = make_players(&[(15, AllIn), (5, AllIn), (90, Active), (90, Active)]);

    let pots = compute_side_pots(&players).expect("разбиение должно пройти");
    assert_eq!(pots.len(), 3, "Ожидаем 3 слоя");

    assert_eq!(pot_info(&pots[0]), (20, vec![0, 1, 2, 3]));
    assert_eq!(pot_info(&pots[1]), (30, vec![0, 2, 3]));
    assert_eq!(pot_info(&pots[2]), (150, vec![2, 3]));
}

/// Два игрока с равным вкладом — один общий пот.
#[test]
fn equal_contributions_share_one_tier() {
    use PlayerStatus::*;
    let players = make_players(&[(100, Active), (100, Active)]);

    let pots = compute_side_pots(&players).expect("разбиение должно пройти");
    assert_eq!(pots.len(), 1);
    assert_eq!(pot_info(&pots[0]), (200, vec![0, 1]));
}

/// Три all-in лесенкой: 100 / 200 / 300.
#[test]
fn three_all_ins_form_three_tiers() {
    use PlayerStatus::*;
    let players = make_players(&[(100, AllIn), (200, AllIn), (300, AllIn)]);

    let pots = compute_side_pots(&players).expect("разбиение должно пройти");
    assert_eq!(pots.len(), 3);

    assert_eq!(pot_info(&pots[0]), (300, vec![0, 1, 2]));
    assert_eq!(pot_info(&pots[1]), (200, vec![1, 2]));
    assert_eq!(pot_info(&pots[2]), (100, vec![2]));
}

//
// ====================== ELIGIBLE И ФОЛДЫ ======================
//

/// Сфолдивший не претендует ни на один пот, но его фишки из банка
/// не возвращаются.
#[test]
fn folded_player_is_excluded_but_chips_stay() {
    use PlayerStatus::*;
    let players = make_players(&[(100, Folded), (100, Active), (100, Active)]);

    let pots = compute_side_pots(&players).expect("разбиение должно пройти");
    assert_eq!(pots.len(), 1);

    let (amount, seats) = pot_info(&pots[0]);
    assert_eq!(amount, 300, "Фишки сфолдившего остаются в поте");
    assert_eq!(seats, vec![1, 2], "Сфолдивший не в eligible");
}

/// Сфолдивший на среднем уровне исключён из всех слоёв, включая свой.
#[test]
fn folded_mid_tier_is_excluded_from_every_pot() {
    use PlayerStatus::*;
    let players = make_players(&[(50, AllIn), (120, Folded), (200, Active), (200, Active)]);

    let pots = compute_side_pots(&players).expect("разбиение должно пройти");

    for pot in &pots {
        assert!(
            !pot.eligible.contains(&1),
            "Сфолдивший seat 1 не должен попасть в eligible"
        );
    }

    // Сумма потов — все внесённые фишки, включая фолд.
    let total: u64 = pots.iter().map(|p| p.amount.0).sum();
    assert_eq!(total, 50 + 120 + 200 + 200);
}

//
// ====================== СОХРАНЕНИЕ И КРАЯ ======================
//

/// Сумма потов всегда равна сумме вкладов.
#[test]
fn side_pots_conserve_contributions() {
    use PlayerStatus::*;
    let players = make_players(&[(37, AllIn), (250, Active), (250, Active), (12, Folded)]);

    let pots = compute_side_pots(&players).expect("разбиение должно пройти");

    let total_pots: u64 = pots.iter().map(|p| p.amount.0).sum();
    assert_eq!(total_pots, 37 + 250 + 250 + 12);

    // Нулевых потов не бывает.
    for pot in &pots {
        assert!(!pot.amount.is_zero(), "Пот не должен быть нулевым");
    }
}

/// Без вкладов — без потов.
#[test]
fn no_contributions_no_pots() {
    use PlayerStatus::*;
    let players = make_players(&[(0, Active), (0, Active)]);

    let pots = compute_side_pots(&players).expect("разбиение должно пройти");
    assert!(pots.is_empty());
}
