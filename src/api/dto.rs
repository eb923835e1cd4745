use serde::{Deserialize, Serialize};

use crate::domain::board::Marker;
use crate::domain::card::Card;
use crate::domain::moves::Move;
use crate::domain::participant::{RoundOutcome, Scoreboard, Side};
use crate::engine::Phase;
use crate::eval::Resolution;

/// Строка истории RPS.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RpsRoundDto {
    pub round: u32,
    pub human_move: Move,
    pub computer_move: Move,
    /// Имя победителя или "Draw".
    pub winner: String,
}

/// DTO матча RPS.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RpsMatchDto {
    pub human_name: String,
    pub computer_name: String,
    pub scores: Scoreboard,
    pub target_wins: u32,
    pub rounds_played: u32,
    pub history: Vec<RpsRoundDto>,
    /// Победитель матча, если он уже есть.
    pub grand_winner: Option<Side>,
}

/// DTO матча Tic-Tac-Toe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TicTacToeDto {
    pub human_name: String,
    pub computer_name: String,
    pub human_marker: Marker,
    pub computer_marker: Marker,
    /// Клетки 1..9 по порядку.
    pub cells: Vec<Option<Marker>>,
    /// Свободные клетки (номера).
    pub open_cells: Vec<u8>,
    pub scores: Scoreboard,
    pub target_wins: u32,
    pub round: u32,
    pub phase: Phase,
    pub last_outcome: Option<RoundOutcome>,
}

/// DTO руки Twenty-One.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandDto {
    pub name: String,
    pub cards: Vec<Card>,
    /// Сумма по видимым картам.
    pub total: u32,
    /// Сколько карт скрыто от игрока.
    pub hidden_cards: usize,
}

/// DTO раздачи Twenty-One.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TwentyOneDto {
    pub player: HandDto,
    pub dealer: HandDto,
    /// "dealing" | "player_turn" | "dealer_turn" | "resolved"
    pub stage: String,
    pub resolution: Option<Resolution>,
    pub outcome: Option<RoundOutcome>,
}

/// DTO серии раздач за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TwentyOneTableDto {
    pub player_name: String,
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub ties: u32,
    pub hands: u32,
    pub current: Option<TwentyOneDto>,
}
