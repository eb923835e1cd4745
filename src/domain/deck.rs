use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Face, Suit};
use crate::engine::RandomSource;

/// Колода карт. В домене - просто упорядоченный список карт.
///
/// Колода не истощается: каждая выдача берёт карту из заново
/// перемешанной полной копии, как в исходных правилах стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Hearts 2..A, Diamonds 2..A, Spades 2..A, Clubs 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for face in Face::ALL {
                cards.push(Card::new(suit, face));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Позиция карты в стандартном порядке (нужна скриптованному RNG в тестах).
    pub fn position_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|c| *c == card)
    }

    /// Выдать одну карту: перемешиваем копию колоды и берём верхнюю.
    /// Сама колода не меняется.
    pub fn deal_one<R: RandomSource>(&self, rng: &mut R) -> Option<Card> {
        let mut shuffled = self.cards.clone();
        rng.shuffle(&mut shuffled);
        shuffled.pop()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard_52()
    }
}
