use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::SeatIndex;
use crate::engine::errors::EngineError;

/// Сайд-пот: часть банка со своим кругом претендентов.
/// Сфолдившие в eligible не входят (их фишки в поте остаются);
/// all-in игрок претендует на все поты своего уровня и ниже.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    pub eligible: Vec<SeatIndex>,
}

/// Разложить суммарные вклады на поты по уровням all-in.
///
/// Проход по уровням вкладов снизу вверх: слой уровня c даёт пот
/// `(c - prev) * |ещё не исчерпанные|`; игроки с равным вкладом
/// исчерпываются одним слоем. Результат — от главного пота (нижний
/// слой, больше всего претендентов) к верхним.
pub fn compute_side_pots(players: &[Player]) -> Result<Vec<SidePot>, EngineError> {
    let mut entries: Vec<(SeatIndex, Chips)> = players
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.total_contribution.is_zero())
        .map(|(seat, p)| (seat, p.total_contribution))
        .collect();

    entries.sort_by_key(|&(_, c)| c);

    let mut pots = Vec::new();
    let mut prev_level = Chips::ZERO;

    for (i, &(_, level)) in entries.iter().enumerate() {
        if level == prev_level {
            continue;
        }
        let tier = level - prev_level;
        let remaining = &entries[i..];
        let amount = Chips(tier.0 * remaining.len() as u64);
        let eligible = remaining
            .iter()
            .map(|&(seat, _)| seat)
            .filter(|&seat| players[seat].is_in_hand())
            .collect();
        pots.push(SidePot { amount, eligible });
        prev_level = level;
    }

    // Закон сохранения: слои обязаны разложить вклады без остатка.
    let expected: Chips = entries.iter().map(|&(_, c)| c).sum();
    let actual: Chips = pots.iter().map(|p| p.amount).sum();
    if actual != expected {
        log::error!(
            "нарушение сохранения фишек при разбиении на поты: вклады {expected}, \
             поты {actual}; реестр: {}",
            contribution_ledger(players)
        );
        return Err(EngineError::ChipConservation { expected, actual });
    }

    Ok(pots)
}

/// Полный реестр вкладов — уходит в лог при любом нарушении
/// сохранения фишек, для постмортема.
pub(crate) fn contribution_ledger(players: &[Player]) -> String {
    let rows: Vec<serde_json::Value> = players
        .iter()
        .enumerate()
        .map(|(seat, p)| {
            serde_json::json!({
                "seat": seat,
                "player_id": p.player_id,
                "status": p.status,
                "round": p.round_contribution.0,
                "total": p.total_contribution.0,
            })
        })
        .collect();
    serde_json::Value::Array(rows).to_string()
}
