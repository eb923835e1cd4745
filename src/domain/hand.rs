use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Рука участника Twenty-One: карты в порядке раздачи.
/// Подсчёт очков живёт в `eval::blackjack`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Первая карта (у дилера она открыта до конца хода игрока).
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn ace_count(&self) -> usize {
        self.cards.iter().filter(|c| c.face.is_ace()).count()
    }
}
