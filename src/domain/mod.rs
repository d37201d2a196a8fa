//! Доменная модель раздачи: фишки, карты, колода, игроки, кошельки, ставки.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod stakes;
pub mod wallet;

/// Идентификатор игрока. Выдаёт хост (чат, лобби и т.п.).
pub type PlayerId = u64;
/// Индекс места в раздаче (0..players.len()-1). Порядок мест фиксирован
/// на всю раздачу; место 0 — дилерская кнопка.
pub type SeatIndex = usize;
/// Идентификатор раздачи.
pub type HandId = u64;

pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use stakes::*;
pub use wallet::*;
