use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::wallet::{Wallet, WalletError};

/// Кошелёк в памяти — для тестов и однопроцессных хостов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct InMemoryWallet {
    balance: Chips,
}

impl InMemoryWallet {
    pub fn new(initial: Chips) -> Self {
        Self { balance: initial }
    }
}

impl Wallet for InMemoryWallet {
    fn balance(&self) -> Chips {
        self.balance
    }

    fn debit(&mut self, amount: Chips) -> Result<(), WalletError> {
        if self.balance < amount {
            return Err(WalletError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    fn credit(&mut self, amount: Chips) {
        self.balance += amount;
    }
}
