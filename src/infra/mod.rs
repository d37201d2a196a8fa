//! Инфраструктурные реализации collaborator'ов движка: RNG и кошелёк
//! в памяти. Хост может подставить свои.

pub mod rng;
pub mod wallet;

pub use rng::{DeterministicRng, SystemRng};
pub use wallet::InMemoryWallet;
