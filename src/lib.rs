//! Движок ставок и расчёта для многопользовательского техасского холдема.
//!
//! Ядро правил одной раздачи: машина очередности ходов, учёт раунда
//! ставок, разбиение банка на сайд-поты при неравных all-in и выплата
//! победителям на шоудауне. Транспорт (чат, уведомления), оценка силы
//! рук и персистентность балансов — внешние collaborator'ы: см.
//! `eval::HandEvaluator` и `domain::Wallet`.
//!
//! Каждая раздача — самостоятельное значение `engine::Hand` без
//! глобального состояния; все операции принимают `&mut Hand`.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
