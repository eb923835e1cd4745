use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,   // ♥
    Diamonds, // ♦
    Spades,   // ♠
    Clubs,    // ♣
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];
}

/// Достоинство карты (2..10, J, Q, K, A).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Face {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Face {
    pub const ALL: [Face; 13] = [
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Jack,
        Face::Queen,
        Face::King,
        Face::Ace,
    ];

    /// Очки карты до поправки на тузы: картинки = 10, туз = 11.
    pub const fn points(self) -> u32 {
        match self {
            Face::Jack | Face::Queen | Face::King => 10,
            Face::Ace => 11,
            f => f as u32,
        }
    }

    pub fn is_ace(self) -> bool {
        self == Face::Ace
    }
}

/// Карта стандартной 52-карточной колоды.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub face: Face,
}

impl Card {
    pub const fn new(suit: Suit, face: Face) -> Self {
        Self { suit, face }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Jack => write!(f, "J"),
            Face::Queen => write!(f, "Q"),
            Face::King => write!(f, "K"),
            Face::Ace => write!(f, "A"),
            n => write!(f, "{}", *n as u32),
        }
    }
}

impl fmt::Display for Card {
    /// Формат вида `A of Hearts`, `10 of Clubs`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.face, self.suit)
    }
}

/// Короткая запись для тестов и отладки: "Ah", "10c", "Qs".
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = match s.char_indices().last() {
            Some((idx, _)) if idx > 0 => idx,
            _ => return Err("Card string must have at least 2 chars".into()),
        };
        let (face_part, suit_part) = s.split_at(split);

        let face = match face_part.to_ascii_uppercase().as_str() {
            "2" => Face::Two,
            "3" => Face::Three,
            "4" => Face::Four,
            "5" => Face::Five,
            "6" => Face::Six,
            "7" => Face::Seven,
            "8" => Face::Eight,
            "9" => Face::Nine,
            "10" | "T" => Face::Ten,
            "J" => Face::Jack,
            "Q" => Face::Queen,
            "K" => Face::King,
            "A" => Face::Ace,
            other => return Err(format!("Invalid face: {other}")),
        };

        let suit = match suit_part {
            "h" | "H" => Suit::Hearts,
            "d" | "D" => Suit::Diamonds,
            "s" | "S" => Suit::Spades,
            "c" | "C" => Suit::Clubs,
            other => return Err(format!("Invalid suit: {other}")),
        };

        Ok(Card { suit, face })
    }
}
