use serde::{Deserialize, Serialize};

use crate::domain::config::DEALER_STANDS_ON;
use crate::domain::hand::Hand;
use crate::engine::errors::EngineError;
use crate::engine::strategy::Strategy;
use crate::engine::RandomSource;
use crate::eval::hand_total;

/// Решение дилера на очередном шаге.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DealerDecision {
    Hit,
    Stand,
}

/// Правило дилера: берёт карту, пока сумма меньше 17. Без случайности.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealerPolicy;

impl DealerPolicy {
    pub fn decide(&self, hand: &Hand) -> DealerDecision {
        if hand_total(hand) < DEALER_STANDS_ON {
            DealerDecision::Hit
        } else {
            DealerDecision::Stand
        }
    }
}

impl Strategy for DealerPolicy {
    type View = Hand;
    type Action = DealerDecision;

    fn choose<R: RandomSource>(
        &self,
        hand: &Hand,
        _rng: &mut R,
    ) -> Result<DealerDecision, EngineError> {
        Ok(self.decide(hand))
    }
}
