use thiserror::Error;

use crate::domain::chips::Chips;

/// Ошибки кошелька.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("недостаточно средств: нужно {needed}, доступно {available}")]
    InsufficientFunds { needed: Chips, available: Chips },
}

/// Кошелёк игрока — внешняя capability.
///
/// Движок не знает, где лежит баланс (БД хоста, память, что угодно):
/// он только синхронно снимает и зачисляет фишки. При разделяемом
/// хранилище блокировки/транзакции — дисциплина вызывающей стороны;
/// движок рассчитывает на единственного авторизованного вызывающего
/// на раздачу. `Send`, чтобы раздачи могли жить в разных потоках.
pub trait Wallet: Send {
    /// Текущий баланс.
    fn balance(&self) -> Chips;

    /// Проверить, что сумма снимаема, без списания.
    fn authorize(&self, amount: Chips) -> Result<(), WalletError> {
        let available = self.balance();
        if available < amount {
            return Err(WalletError::InsufficientFunds {
                needed: amount,
                available,
            });
        }
        Ok(())
    }

    /// Снять amount. Ошибка, если баланс меньше.
    fn debit(&mut self, amount: Chips) -> Result<(), WalletError>;

    /// Зачислить amount (выплата из банка).
    fn credit(&mut self, amount: Chips);
}
