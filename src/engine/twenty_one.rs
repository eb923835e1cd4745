use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::engine::dealer::{DealerDecision, DealerPolicy};
use crate::engine::errors::EngineError;
use crate::engine::history::History;
use crate::engine::strategy::Strategy;
use crate::engine::RandomSource;
use crate::eval::{hand_total, is_blackjack, is_bust, resolve, Resolution};

/// Защита от бесконечного добора (дилер с таким правилом столько не наберёт).
const MAX_DEALER_DRAWS: usize = 21;

/// Стадия раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Stage {
    Dealing,
    PlayerTurn,
    DealerTurn,
    Resolved(Resolution),
}

/// Решение игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stay,
}

/// Чья рука.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Seat {
    Player,
    Dealer,
}

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum TableEvent {
    /// Раздача началась.
    RoundStarted { dealer_name: String },

    /// Начальная раздача: по две карты каждому.
    CardDealt { seat: Seat, card: Card },

    /// Игрок взял карту.
    PlayerHit { card: Card, total: u32 },

    /// Игрок остановился.
    PlayerStayed { total: u32 },

    /// Дилер взял карту.
    DealerDrew { card: Card, total: u32 },

    /// Дилер остановился.
    DealerStood { total: u32 },

    /// Итог раздачи.
    Resolved {
        resolution: Resolution,
        player_total: u32,
        dealer_total: u32,
    },
}

/// Одна раздача Twenty-One: игрок против дилера.
#[derive(Clone, Debug)]
pub struct TwentyOneRound {
    dealer_name: String,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    policy: DealerPolicy,
    stage: Stage,
    history: History<TableEvent>,
}

impl TwentyOneRound {
    /// Старт раздачи: по две карты игроку и дилеру (игрок, дилер, игрок, дилер).
    /// Если у игрока сразу 21 – ход переходит к дилеру.
    pub fn deal<R: RandomSource>(
        dealer_name: impl Into<String>,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let dealer_name = dealer_name.into();
        let mut round = Self {
            dealer_name: dealer_name.clone(),
            deck: Deck::standard_52(),
            player: Hand::new(),
            dealer: Hand::new(),
            policy: DealerPolicy,
            stage: Stage::Dealing,
            history: History::new(),
        };
        round.history.push(TableEvent::RoundStarted { dealer_name });

        for _ in 0..2 {
            for seat in [Seat::Player, Seat::Dealer] {
                let card = round.draw(rng)?;
                match seat {
                    Seat::Player => round.player.add(card),
                    Seat::Dealer => round.dealer.add(card),
                }
                round.history.push(TableEvent::CardDealt { seat, card });
            }
        }

        round.stage = if is_blackjack(&round.player) {
            Stage::DealerTurn
        } else {
            Stage::PlayerTurn
        };

        debug!(
            player_total = hand_total(&round.player),
            stage = ?round.stage,
            "twenty-one hand dealt"
        );

        Ok(round)
    }

    /// Решение игрока: взять карту или остановиться.
    pub fn apply_decision<R: RandomSource>(
        &mut self,
        decision: Decision,
        rng: &mut R,
    ) -> Result<Stage, EngineError> {
        match self.stage {
            Stage::PlayerTurn => {}
            Stage::Resolved(_) => return Err(EngineError::RoundResolved),
            Stage::Dealing | Stage::DealerTurn => return Err(EngineError::NotPlayerTurn),
        }

        match decision {
            Decision::Hit => {
                let card = self.draw(rng)?;
                self.player.add(card);
                let total = hand_total(&self.player);
                self.history.push(TableEvent::PlayerHit { card, total });
                debug!(%card, total, "player hits");

                if is_bust(&self.player) {
                    self.finish();
                } else if is_blackjack(&self.player) {
                    self.stage = Stage::DealerTurn;
                }
            }
            Decision::Stay => {
                let total = hand_total(&self.player);
                self.history.push(TableEvent::PlayerStayed { total });
                debug!(total, "player stays");
                self.stage = Stage::DealerTurn;
            }
        }

        Ok(self.stage)
    }

    /// Ход дилера: добирает по правилу, затем раздача закрывается.
    pub fn play_dealer<R: RandomSource>(&mut self, rng: &mut R) -> Result<Resolution, EngineError> {
        match self.stage {
            Stage::DealerTurn => {}
            Stage::Resolved(_) => return Err(EngineError::RoundResolved),
            Stage::Dealing | Stage::PlayerTurn => return Err(EngineError::NotDealerTurn),
        }

        for _ in 0..MAX_DEALER_DRAWS {
            match self.policy.choose(&self.dealer, rng)? {
                DealerDecision::Hit => {
                    let card = self.draw(rng)?;
                    self.dealer.add(card);
                    let total = hand_total(&self.dealer);
                    self.history.push(TableEvent::DealerDrew { card, total });
                    debug!(%card, total, "dealer draws");
                }
                DealerDecision::Stand => break,
            }
        }

        if !is_bust(&self.dealer) {
            self.history.push(TableEvent::DealerStood {
                total: hand_total(&self.dealer),
            });
        }

        Ok(self.finish())
    }

    fn finish(&mut self) -> Resolution {
        let resolution = resolve(&self.player, &self.dealer);
        let player_total = hand_total(&self.player);
        let dealer_total = hand_total(&self.dealer);

        self.stage = Stage::Resolved(resolution);
        self.history.push(TableEvent::Resolved {
            resolution,
            player_total,
            dealer_total,
        });
        debug!(?resolution, player_total, dealer_total, "twenty-one hand resolved");

        resolution
    }

    /// Каждая карта – из свежей перемешанной колоды.
    fn draw<R: RandomSource>(&self, rng: &mut R) -> Result<Card, EngineError> {
        self.deck
            .deal_one(rng)
            .ok_or(EngineError::Internal("колода пуста"))
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn resolution(&self) -> Option<Resolution> {
        match self.stage {
            Stage::Resolved(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution().is_some()
    }

    pub fn dealer_name(&self) -> &str {
        &self.dealer_name
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn player_total(&self) -> u32 {
        hand_total(&self.player)
    }

    pub fn dealer_total(&self) -> u32 {
        hand_total(&self.dealer)
    }

    /// Карты дилера, которые видит игрок: до конца раздачи – только первая.
    pub fn visible_dealer_cards(&self) -> &[Card] {
        if self.is_resolved() || self.dealer.is_empty() {
            self.dealer.cards()
        } else {
            &self.dealer.cards()[..1]
        }
    }

    pub fn history(&self) -> &History<TableEvent> {
        &self.history
    }
}
