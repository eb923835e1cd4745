use serde::{Deserialize, Serialize};

use crate::domain::board::Marker;

/// До скольких побед идёт матч RPS.
pub const RPS_TARGET_WINS: u32 = 10;

/// До скольких побед идёт матч Tic-Tac-Toe.
pub const TTT_TARGET_WINS: u32 = 5;

/// Лимит очков в Twenty-One.
pub const BLACKJACK: u32 = 21;

/// Дилер добирает, пока у него меньше этого значения.
pub const DEALER_STANDS_ON: u32 = 17;

/// Настройки матча Tic-Tac-Toe, фиксируются при старте матча.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicTacToeConfig {
    pub human_marker: Marker,
}

impl TicTacToeConfig {
    pub fn new(human_marker: Marker) -> Self {
        Self { human_marker }
    }

    /// Компьютер всегда получает второй маркер.
    pub fn computer_marker(&self) -> Marker {
        self.human_marker.other()
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            human_marker: Marker::X,
        }
    }
}
