use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ход в Rock-Paper-Scissors-Lizard-Spock.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Move {
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    /// Два хода, которые бьёт этот ход.
    pub const fn defeats(self) -> [Move; 2] {
        match self {
            Move::Rock => [Move::Scissors, Move::Lizard],
            Move::Paper => [Move::Rock, Move::Spock],
            Move::Scissors => [Move::Paper, Move::Lizard],
            Move::Lizard => [Move::Paper, Move::Spock],
            Move::Spock => [Move::Scissors, Move::Rock],
        }
    }

    /// Бьёт ли этот ход другой.
    pub fn beats(self, other: Move) -> bool {
        self.defeats().contains(&other)
    }

    /// Клавиша для выбора хода в консоли.
    pub const fn key(self) -> char {
        match self {
            Move::Rock => 'r',
            Move::Paper => 'p',
            Move::Scissors => 's',
            Move::Lizard => 'l',
            Move::Spock => 'k',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Принимает и клавишу (`r`, `p`, `s`, `l`, `k`), и полное имя.
impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Move::ALL
            .into_iter()
            .find(|m| needle == m.name() || needle.chars().eq(std::iter::once(m.key())))
            .ok_or_else(|| format!("Invalid move: {s}"))
    }
}
