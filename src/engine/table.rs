use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::participant::{HumanPlayer, RoundOutcome, Scoreboard, DEALER_NAMES};
use crate::engine::errors::EngineError;
use crate::engine::twenty_one::{Decision, Stage, TwentyOneRound};
use crate::engine::RandomSource;
use crate::eval::Resolution;

/// Итоги серии раздач за один запуск.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionTally {
    pub scores: Scoreboard,
    pub ties: u32,
    pub hands: u32,
}

impl SessionTally {
    fn record(&mut self, resolution: Resolution) {
        let outcome = resolution.outcome();
        self.scores.record(outcome);
        if outcome == RoundOutcome::Tie {
            self.ties += 1;
        }
        self.hands += 1;
    }
}

/// Стол Twenty-One:
/// - хранит игрока и текущую раздачу;
/// - на каждую раздачу выбирает нового дилера из пула имён;
/// - ведёт счёт серии.
#[derive(Clone, Debug)]
pub struct TwentyOneTable {
    player: HumanPlayer,
    round: Option<TwentyOneRound>,
    tally: SessionTally,
}

impl TwentyOneTable {
    pub fn new(player: HumanPlayer) -> Self {
        Self {
            player,
            round: None,
            tally: SessionTally::default(),
        }
    }

    /// Новая раздача. Предыдущая должна быть завершена.
    pub fn start_hand<R: RandomSource>(&mut self, rng: &mut R) -> Result<&TwentyOneRound, EngineError> {
        if self.round.as_ref().is_some_and(|r| !r.is_resolved()) {
            return Err(EngineError::RoundInProgress);
        }

        let dealer_name = DEALER_NAMES[rng.below(DEALER_NAMES.len()).min(DEALER_NAMES.len() - 1)];
        let round = TwentyOneRound::deal(dealer_name, rng)?;
        Ok(&*self.round.insert(round))
    }

    /// Решение игрока в текущей раздаче.
    pub fn decide<R: RandomSource>(&mut self, decision: Decision, rng: &mut R) -> Result<Stage, EngineError> {
        let round = self.round.as_mut().ok_or(EngineError::RoundNotInProgress)?;
        let stage = round.apply_decision(decision, rng)?;
        if let Stage::Resolved(resolution) = stage {
            self.record(resolution);
        }
        Ok(stage)
    }

    /// Доиграть за дилера.
    pub fn finish_dealer<R: RandomSource>(&mut self, rng: &mut R) -> Result<Resolution, EngineError> {
        let round = self.round.as_mut().ok_or(EngineError::RoundNotInProgress)?;
        let resolution = round.play_dealer(rng)?;
        self.record(resolution);
        Ok(resolution)
    }

    fn record(&mut self, resolution: Resolution) {
        self.tally.record(resolution);
        info!(
            ?resolution,
            player_wins = self.tally.scores.human,
            dealer_wins = self.tally.scores.computer,
            ties = self.tally.ties,
            "twenty-one hand recorded"
        );
    }

    pub fn round(&self) -> Option<&TwentyOneRound> {
        self.round.as_ref()
    }

    pub fn player(&self) -> &HumanPlayer {
        &self.player
    }

    pub fn tally(&self) -> SessionTally {
        self.tally
    }
}
