use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::wallet::{Wallet, WalletError};
use crate::domain::PlayerId;

/// Статус игрока в текущей раздаче.
///
/// Folded и AllIn — терминальные: обратно в Active игрок в этой раздаче
/// не возвращается.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Может ходить.
    Active,
    /// Сфолдил; вклад остаётся в банке.
    Folded,
    /// Поставил весь кошелёк; ходить больше не может, но претендует
    /// на поты своих уровней.
    AllIn,
}

/// Игрок в раздаче: вклады и ровно один handle кошелька.
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub status: PlayerStatus,
    /// Вклад в текущем раунде ставок. Сбрасывается при смене улицы.
    /// Инвариант: round_contribution <= total_contribution.
    pub round_contribution: Chips,
    /// Суммарный вклад за раздачу. Только растёт; гасится при расчёте.
    pub total_contribution: Chips,
    /// Карманные карты (2 в холдеме).
    pub hole_cards: Vec<Card>,
    pub wallet: Box<dyn Wallet>,
}

impl Player {
    pub fn new(player_id: PlayerId, name: impl Into<String>, wallet: Box<dyn Wallet>) -> Self {
        Self {
            player_id,
            name: name.into(),
            status: PlayerStatus::Active,
            round_contribution: Chips::ZERO,
            total_contribution: Chips::ZERO,
            hole_cards: Vec::new(),
            wallet,
        }
    }

    /// Участвует ли ещё в банке (не сфолдил).
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Может ли делать ставки.
    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Переместить amount из кошелька во вклад текущего раунда.
    /// Возвращает перемещённую сумму.
    pub(crate) fn commit(&mut self, amount: Chips) -> Result<Chips, WalletError> {
        self.wallet.debit(amount)?;
        self.round_contribution += amount;
        self.total_contribution += amount;
        Ok(amount)
    }

    /// Принудительный взнос не больше amount (блайнд/анте): короткий
    /// стек вносит сколько есть и уходит в all-in.
    pub(crate) fn commit_up_to(&mut self, amount: Chips) -> Chips {
        let available = self.wallet.balance();
        let real = amount.min(available);
        // debit не может не пройти: real <= available.
        if self.wallet.debit(real).is_err() {
            return Chips::ZERO;
        }
        self.round_contribution += real;
        self.total_contribution += real;
        if self.wallet.balance().is_zero() {
            self.status = PlayerStatus::AllIn;
        }
        real
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("player_id", &self.player_id)
            .field("name", &self.name)
            .field("status", &self.status)
            .field("round_contribution", &self.round_contribution)
            .field("total_contribution", &self.total_contribution)
            .field("balance", &self.wallet.balance())
            .finish()
    }
}
