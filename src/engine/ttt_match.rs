use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::board::{Board, Cell, Marker};
use crate::domain::config::{TicTacToeConfig, TTT_TARGET_WINS};
use crate::domain::participant::{ComputerPlayer, HumanPlayer, RoundOutcome, Scoreboard, Side};
use crate::engine::errors::EngineError;
use crate::engine::history::History;
use crate::engine::strategy::Strategy;
use crate::engine::ttt_opponent::BlockingOpponent;
use crate::engine::RandomSource;
use crate::eval::round_result;

/// Тип события в матче Tic-Tac-Toe.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TttEvent {
    /// Новый раунд, первым ходит `first`.
    RoundStarted { round: u32, first: Marker },

    /// Сторона поставила маркер.
    MarkerPlaced { side: Side, marker: Marker, cell: Cell },

    /// Раунд завершён.
    RoundFinished { round: u32, outcome: RoundOutcome },
}

/// Фаза матча.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Матч создан, первый раунд ещё не начат.
    Ready,
    /// Ждём ход стороны с этим маркером.
    AwaitingMove(Marker),
    /// Раунд закончен, матч продолжается.
    RoundComplete(RoundOutcome),
    /// Кто-то набрал 5 побед.
    MatchComplete(Side),
}

/// Что произошло после одного хода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub cell: Cell,
    /// `Some`, если этот ход закончил раунд.
    pub round_over: Option<RoundOutcome>,
}

/// Матч Tic-Tac-Toe до 5 побед.
#[derive(Clone, Debug)]
pub struct TicTacToeMatch {
    config: TicTacToeConfig,
    human: HumanPlayer,
    computer: ComputerPlayer<BlockingOpponent>,
    board: Board,
    /// Чей маркер ходит следующим. Меняется после каждого хода, даже последнего.
    to_move: Marker,
    round_active: bool,
    last_outcome: Option<RoundOutcome>,
    scores: Scoreboard,
    rounds_started: u32,
    history: History<TttEvent>,
}

impl TicTacToeMatch {
    pub fn new(human: HumanPlayer, computer_name: impl Into<String>, config: TicTacToeConfig) -> Self {
        let computer_marker = config.computer_marker();
        Self {
            config,
            human,
            computer: ComputerPlayer::new(computer_name, BlockingOpponent::new(computer_marker)),
            board: Board::new(),
            to_move: config.human_marker,
            round_active: false,
            last_outcome: None,
            scores: Scoreboard::new(),
            rounds_started: 0,
            history: History::new(),
        }
    }

    /// Начать раунд: чистая доска, первым ходит `first`.
    pub fn start_round(&mut self, first: Side) -> Result<(), EngineError> {
        if self.is_complete() {
            return Err(EngineError::MatchComplete);
        }
        if self.round_active {
            return Err(EngineError::RoundInProgress);
        }

        self.board.clear();
        self.to_move = self.marker_of(first);
        self.round_active = true;
        self.last_outcome = None;
        self.rounds_started += 1;

        self.history.push(TttEvent::RoundStarted {
            round: self.rounds_started,
            first: self.to_move,
        });
        debug!(round = self.rounds_started, first = %self.to_move, "ttt round started");

        Ok(())
    }

    /// Ход человека в клетку `cell`.
    pub fn human_move(&mut self, cell: Cell) -> Result<TurnReport, EngineError> {
        self.apply_move(Side::Human, cell)
    }

    /// Ход компьютера по его стратегии.
    pub fn computer_move<R: RandomSource>(&mut self, rng: &mut R) -> Result<TurnReport, EngineError> {
        self.ensure_turn(Side::Computer)?;
        let cell = self.computer.strategy.choose(&self.board, rng)?;
        self.apply_move(Side::Computer, cell)
    }

    fn apply_move(&mut self, side: Side, cell: Cell) -> Result<TurnReport, EngineError> {
        self.ensure_turn(side)?;

        let marker = self.marker_of(side);
        if !self.board.place(cell, marker) {
            return Err(EngineError::CellOccupied(cell));
        }
        self.to_move = self.to_move.other();
        self.history.push(TttEvent::MarkerPlaced { side, marker, cell });

        let round_over = round_result(&self.board).map(|winner| match winner {
            Some(m) => RoundOutcome::won_by(self.side_of(m)),
            None => RoundOutcome::Tie,
        });

        if let Some(outcome) = round_over {
            self.finish_round(outcome);
        }

        Ok(TurnReport {
            side,
            cell,
            round_over,
        })
    }

    fn finish_round(&mut self, outcome: RoundOutcome) {
        self.round_active = false;
        self.last_outcome = Some(outcome);
        self.scores.record(outcome);
        self.history.push(TttEvent::RoundFinished {
            round: self.rounds_started,
            outcome,
        });

        debug!(
            round = self.rounds_started,
            ?outcome,
            human = self.scores.human,
            computer = self.scores.computer,
            "ttt round finished"
        );

        if let Some(winner) = self.winner() {
            info!(?winner, rounds = self.rounds_started, "ttt match complete");
        }
    }

    fn ensure_turn(&self, side: Side) -> Result<(), EngineError> {
        if !self.round_active {
            return Err(EngineError::RoundNotInProgress);
        }
        if self.to_move != self.marker_of(side) {
            return Err(EngineError::NotYourTurn(side));
        }
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        if let Some(winner) = self.winner() {
            return Phase::MatchComplete(winner);
        }
        if self.round_active {
            return Phase::AwaitingMove(self.to_move);
        }
        match self.last_outcome {
            Some(outcome) => Phase::RoundComplete(outcome),
            None => Phase::Ready,
        }
    }

    /// Чей ход сейчас (если раунд идёт).
    pub fn side_to_move(&self) -> Option<Side> {
        self.round_active.then(|| self.side_of(self.to_move))
    }

    /// Маркер, который ходит следующим (меняется и после завершающего хода).
    pub fn marker_to_move(&self) -> Marker {
        self.to_move
    }

    pub fn marker_of(&self, side: Side) -> Marker {
        match side {
            Side::Human => self.config.human_marker,
            Side::Computer => self.config.computer_marker(),
        }
    }

    pub fn side_of(&self, marker: Marker) -> Side {
        if marker == self.config.human_marker {
            Side::Human
        } else {
            Side::Computer
        }
    }

    pub fn winner(&self) -> Option<Side> {
        self.scores.leader_at(TTT_TARGET_WINS)
    }

    pub fn is_complete(&self) -> bool {
        self.winner().is_some()
    }

    pub fn is_round_active(&self) -> bool {
        self.round_active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    pub fn config(&self) -> TicTacToeConfig {
        self.config
    }

    pub fn human(&self) -> &HumanPlayer {
        &self.human
    }

    pub fn computer(&self) -> &ComputerPlayer<BlockingOpponent> {
        &self.computer
    }

    pub fn history(&self) -> &History<TttEvent> {
        &self.history
    }
}
