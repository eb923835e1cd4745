//! Оценка раундов: чистые функции без состояния и без I/O.
//!
//! - `rps::evaluate(a, b) -> Verdict`
//! - `board::is_won / is_full / at_risk_cell`
//! - `blackjack::hand_total / is_bust / is_blackjack / resolve`

pub mod blackjack;
pub mod board;
pub mod rps;

pub use blackjack::{hand_total, is_blackjack, is_bust, resolve, Resolution};
pub use board::{at_risk_cell, is_full, is_won, round_result, winner, WINNING_LINES};
pub use rps::{evaluate, Verdict};
