use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Ставки раздачи: блайнды и (опционально) классическое анте с каждого
/// игрока. `ante = 0` — без анте.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub ante: Chips,
}

impl Stakes {
    pub fn new(small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            small_blind,
            big_blind,
            ante: Chips::ZERO,
        }
    }

    pub fn with_ante(small_blind: Chips, big_blind: Chips, ante: Chips) -> Self {
        Self {
            small_blind,
            big_blind,
            ante,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.small_blind.is_zero() {
            return Err("small_blind = 0".into());
        }
        if self.big_blind.is_zero() {
            return Err("big_blind = 0".into());
        }
        if self.big_blind < self.small_blind {
            return Err(format!(
                "big_blind ({}) < small_blind ({})",
                self.big_blind, self.small_blind
            ));
        }
        Ok(())
    }
}
