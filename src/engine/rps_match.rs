use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::config::RPS_TARGET_WINS;
use crate::domain::moves::Move;
use crate::domain::participant::{ComputerPlayer, HumanPlayer, RoundOutcome, Scoreboard, Side};
use crate::engine::errors::EngineError;
use crate::engine::history::History;
use crate::engine::personality::Personality;
use crate::engine::strategy::Strategy;
use crate::engine::RandomSource;
use crate::eval::{evaluate, Verdict};

/// Сыгранный раунд RPS.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RpsRound {
    /// Номер раунда, с 1.
    pub number: u32,
    pub human: Move,
    pub computer: Move,
    pub outcome: RoundOutcome,
}

/// Статус матча для внешнего кода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Complete { winner: Side },
}

/// Матч RPS до 10 побед.
#[derive(Clone, Debug)]
pub struct RpsMatch {
    human: HumanPlayer,
    computer: ComputerPlayer<Personality>,
    scores: Scoreboard,
    rounds_played: u32,
    history: History<RpsRound>,
}

impl RpsMatch {
    pub fn new(human: HumanPlayer, personality: Personality) -> Self {
        Self {
            human,
            computer: ComputerPlayer::new(personality.name(), personality),
            scores: Scoreboard::new(),
            rounds_played: 0,
            history: History::new(),
        }
    }

    /// Новый матч со случайно выбранным соперником.
    pub fn with_random_opponent<R: RandomSource>(human: HumanPlayer, rng: &mut R) -> Self {
        Self::new(human, Personality::random(rng))
    }

    /// Сыграть раунд: компьютер выбирает ход по своему характеру.
    pub fn play_round<R: RandomSource>(
        &mut self,
        human_move: Move,
        rng: &mut R,
    ) -> Result<RpsRound, EngineError> {
        self.ensure_in_progress()?;
        let computer_move = self.computer.strategy.choose(&(), rng)?;
        self.resolve_round(human_move, computer_move)
    }

    /// Сыграть раунд с уже известными ходами обеих сторон.
    pub fn resolve_round(
        &mut self,
        human_move: Move,
        computer_move: Move,
    ) -> Result<RpsRound, EngineError> {
        self.ensure_in_progress()?;

        let outcome = match evaluate(human_move, computer_move) {
            Verdict::FirstWins => RoundOutcome::HumanWins,
            Verdict::SecondWins => RoundOutcome::ComputerWins,
            Verdict::Tie => RoundOutcome::Tie,
        };

        self.rounds_played += 1;
        self.scores.record(outcome);

        let round = RpsRound {
            number: self.rounds_played,
            human: human_move,
            computer: computer_move,
            outcome,
        };
        self.history.push(round);

        debug!(
            round = round.number,
            human = %human_move,
            computer = %computer_move,
            ?outcome,
            "rps round resolved"
        );

        if let MatchStatus::Complete { winner } = self.status() {
            info!(
                ?winner,
                human = self.scores.human,
                computer = self.scores.computer,
                rounds = self.rounds_played,
                "rps match complete"
            );
        }

        Ok(round)
    }

    pub fn status(&self) -> MatchStatus {
        match self.scores.leader_at(RPS_TARGET_WINS) {
            Some(winner) => MatchStatus::Complete { winner },
            None => MatchStatus::InProgress,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.status(), MatchStatus::Complete { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status() {
            MatchStatus::Complete { winner } => Some(winner),
            MatchStatus::InProgress => None,
        }
    }

    /// Номер раунда, который будет сыгран следующим.
    pub fn next_round_number(&self) -> u32 {
        self.rounds_played + 1
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn history(&self) -> &History<RpsRound> {
        &self.history
    }

    pub fn human(&self) -> &HumanPlayer {
        &self.human
    }

    pub fn computer(&self) -> &ComputerPlayer<Personality> {
        &self.computer
    }

    pub fn personality(&self) -> Personality {
        self.computer.strategy
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        if self.is_complete() {
            return Err(EngineError::MatchComplete);
        }
        Ok(())
    }
}
