use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::player::{Player, PlayerStatus};
use crate::domain::SeatIndex;
use crate::engine::errors::EngineError;

/// Состояние раунда ставок на конкретной улице: кто сколько должен
/// и чьё действие закрывает раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingRound {
    /// Текущая ставка-цель, до которой должны дотянуться активные.
    pub current_bet: Chips,
    /// Минимальная повышающая часть рейза (базово — big blind).
    pub min_raise: Chips,
    /// Место, чьё действие закрывает раунд: последний агрессор, а на
    /// префлопе без рейзов — большой блайнд.
    pub closing_seat: Option<SeatIndex>,
    /// Ходил ли закрывающий после последнего рейза. Сравнения вкладов
    /// недостаточно: на префлопе без рейза все уравнены, но BB ещё
    /// не высказался.
    pub closer_has_acted: bool,
    /// Улица, к которой относится раунд.
    pub street: Street,
}

impl BettingRound {
    pub fn new(street: Street, big_blind: Chips) -> Self {
        Self {
            current_bet: Chips::ZERO,
            min_raise: big_blind,
            closing_seat: None,
            closer_has_acted: false,
            street,
        }
    }

    /// Check/call: довнести до current_bet (0 — это check).
    /// Возвращает перемещённую сумму; `InsufficientFunds`, если кошелёк
    /// не покрывает call — вызывающий должен прислать all-in.
    pub fn call_or_check(&mut self, player: &mut Player) -> Result<Chips, EngineError> {
        let due = self.current_bet.saturating_sub(player.round_contribution);
        if due.is_zero() {
            return Ok(Chips::ZERO);
        }
        player.wallet.authorize(due)?;
        let moved = player.commit(due)?;
        Ok(moved)
    }

    /// Bet/raise до target_total — нового суммарного вклада в раунде.
    /// Требует target_total > current_bet; при успехе раунд
    /// переоткрывается: все прочие активные должны высказаться снова.
    pub fn bet_or_raise(
        &mut self,
        player: &mut Player,
        seat: SeatIndex,
        target_total: Chips,
    ) -> Result<Chips, EngineError> {
        if target_total <= self.current_bet {
            return Err(EngineError::IllegalAction);
        }
        let due = target_total.saturating_sub(player.round_contribution);
        if due.is_zero() {
            return Err(EngineError::IllegalAction);
        }
        player.wallet.authorize(due)?;
        let moved = player.commit(due)?;
        let raise = target_total - self.current_bet;
        self.reopen(seat, target_total, raise);
        Ok(moved)
    }

    /// All-in: весь остаток кошелька, сколько бы ни был current_bet.
    /// Итог выше current_bet переоткрывает раунд как рейз; недоcall
    /// не возвращает ход уже уравнявшим. Пустой кошелёк допустим —
    /// это принудительный all-in игрока без фишек.
    pub fn all_in(&mut self, player: &mut Player, seat: SeatIndex) -> Result<Chips, EngineError> {
        let balance = player.wallet.balance();
        let moved = player.commit(balance)?;
        player.status = PlayerStatus::AllIn;
        let total = player.round_contribution;
        if total > self.current_bet {
            let raise = total - self.current_bet;
            self.reopen(seat, total, raise);
        }
        Ok(moved)
    }

    /// Fold: вклад остаётся в банке, обратно в Active пути нет.
    pub fn fold(&mut self, player: &mut Player) {
        player.status = PlayerStatus::Folded;
    }

    /// Отметить, что место походило (для отслеживания закрывающего).
    pub fn mark_acted(&mut self, seat: SeatIndex) {
        if self.closing_seat == Some(seat) {
            self.closer_has_acted = true;
        }
    }

    /// Закрыт ли раунд: все активные уравнены до current_bet, и
    /// закрывающий походил после последнего рейза (или уже не активен
    /// и высказаться не может).
    pub fn is_round_closed(&self, players: &[Player]) -> bool {
        let matched = players
            .iter()
            .filter(|p| p.can_act())
            .all(|p| p.round_contribution == self.current_bet);
        if !matched {
            return false;
        }
        // Уравненный раунд с одним способным ставить закрыт: торговаться
        // больше не с кем.
        if players.iter().filter(|p| p.can_act()).count() <= 1 {
            return true;
        }
        match self.closing_seat {
            None => true,
            Some(seat) => {
                self.closer_has_acted
                    || players
                        .get(seat)
                        .map(|p| !p.can_act())
                        .unwrap_or(true)
            }
        }
    }

    /// Рейз: новая цель, новый минимум и новый закрывающий. Сам рейз —
    /// уже действие закрывающего.
    fn reopen(&mut self, seat: SeatIndex, new_bet: Chips, raise: Chips) {
        self.current_bet = new_bet;
        self.min_raise = raise;
        self.closing_seat = Some(seat);
        self.closer_has_acted = true;
    }
}
