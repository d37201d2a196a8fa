//! Контракт внешнего оценщика рук.
//!
//! 7-карточную оценку движок не реализует: хост передаёт collaborator,
//! умеющий превратить карманные карты и борд в полностью упорядоченный
//! `Score` и лучшую пятёрку карт для показа.

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Лучшие пять карт, составившие комбинацию.
pub type BestFive = [Card; 5];

/// Сила руки. Полный порядок, больше — сильнее. Равные `Score` у разных
/// пятёрок означают настоящий сплит для выплат, а не просто одинаковую
/// категорию комбинации.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Score(pub u32);

/// Оценщик рук.
pub trait HandEvaluator {
    /// Оценить руку: 2 карманные карты + 0..5 карт борда.
    fn evaluate(&self, hole_cards: &[Card], board: &[Card]) -> (Score, BestFive);
}
