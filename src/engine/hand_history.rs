use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::{HandId, PlayerId, SeatIndex};
use crate::engine::actions::Action;
use crate::eval::Score;

/// Тип события в раздаче.
///
/// История — это то, что движок отдаёт хосту вместо уведомлений:
/// `TurnPrompted` — «сейчас ход игрока X», `PotAwarded` — «выплата».
/// Сам движок никуда ничего не шлёт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Раздача началась.
    HandStarted {
        hand_id: HandId,
        players: Vec<PlayerId>,
    },

    /// Кнопка и принудительные взносы.
    BlindsPosted {
        dealer: SeatIndex,
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
        antes: Vec<(SeatIndex, Chips)>,
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Ход перешёл к игроку.
    TurnPrompted { seat: SeatIndex, player_id: PlayerId },

    /// Действие игрока; moved — точная сумма, ушедшая из кошелька.
    PlayerActed {
        seat: SeatIndex,
        player_id: PlayerId,
        action: Action,
        moved: Chips,
        pot_after: Chips,
    },

    /// Открыта улица (пустой список карт на шоудауне).
    StreetDealt { street: Street, cards: Vec<Card> },

    /// Вскрытие на шоудауне.
    ShowdownReveal {
        seat: SeatIndex,
        player_id: PlayerId,
        hole_cards: Vec<Card>,
        score: Score,
    },

    /// Выплата из банка.
    PotAwarded {
        seat: SeatIndex,
        player_id: PlayerId,
        amount: Chips,
    },

    /// Раздача рассчитана, банк разошёлся в ноль.
    HandSettled { hand_id: HandId },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи, только дозапись.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let index = self.events.len() as u32;
        self.events.push(HandEvent { index, kind });
    }

    /// История в JSON — для логов/реплеера хоста.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.events)
    }
}
