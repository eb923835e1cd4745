//! Доменная модель игр: карты, доска, ходы, участники, счёт и конфиги.

pub mod board;
pub mod card;
pub mod config;
pub mod deck;
pub mod hand;
pub mod moves;
pub mod participant;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use board::*;
pub use card::*;
pub use config::*;
pub use deck::*;
pub use hand::*;
pub use moves::*;
pub use participant::*;
