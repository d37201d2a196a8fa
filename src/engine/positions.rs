use crate::domain::player::Player;
use crate::domain::SeatIndex;

/// Места по кругу начиная со start (включая start).
pub fn seats_from(count: usize, start: SeatIndex) -> impl Iterator<Item = SeatIndex> {
    (0..count).map(move |i| (start + i) % count)
}

/// Следующее активное место по кругу строго после from.
/// Сфолдившие и all-in пропускаются: ходить им больше нечем.
pub fn next_active_seat(players: &[Player], from: SeatIndex) -> Option<SeatIndex> {
    let n = players.len();
    if n == 0 {
        return None;
    }
    seats_from(n, (from + 1) % n)
        .take(n - 1)
        .find(|&s| players[s].can_act())
}

/// Последнее активное место в порядке хода, начиная с first.
/// Это закрывающий по умолчанию на новой улице.
pub fn last_active_in_rotation(players: &[Player], first: SeatIndex) -> Option<SeatIndex> {
    seats_from(players.len(), first)
        .filter(|&s| players[s].can_act())
        .last()
}

/// Участвующие в раздаче места по кругу от start (включая start).
pub fn seats_in_hand_from(players: &[Player], start: SeatIndex) -> Vec<SeatIndex> {
    seats_from(players.len(), start)
        .filter(|&s| players[s].is_in_hand())
        .collect()
}
