use serde::{Deserialize, Serialize};

/// Сторона за столом.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub const fn other(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Итог одного раунда с точки зрения матча.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    HumanWins,
    ComputerWins,
    Tie,
}

impl RoundOutcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::HumanWins => Some(Side::Human),
            RoundOutcome::ComputerWins => Some(Side::Computer),
            RoundOutcome::Tie => None,
        }
    }

    pub fn won_by(side: Side) -> Self {
        match side {
            Side::Human => RoundOutcome::HumanWins,
            Side::Computer => RoundOutcome::ComputerWins,
        }
    }
}

/// Счёт матча. Значения только растут.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scoreboard {
    pub human: u32,
    pub computer: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Начислить очко победителю раунда (ничья ничего не меняет).
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome.winner() {
            Some(Side::Human) => self.human += 1,
            Some(Side::Computer) => self.computer += 1,
            None => {}
        }
    }

    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Computer => self.computer,
        }
    }

    /// Кто первым добрался до `target` побед.
    pub fn leader_at(&self, target: u32) -> Option<Side> {
        if self.human >= target {
            Some(Side::Human)
        } else if self.computer >= target {
            Some(Side::Computer)
        } else {
            None
        }
    }
}

/// Общий интерфейс участника: имя и сторона. Очки ведёт `Scoreboard` матча.
pub trait Competitor {
    fn name(&self) -> &str;
    fn side(&self) -> Side;
}

/// Человек за терминалом. Имя уже проверено фронтом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HumanPlayer {
    pub name: String,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Competitor for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Side {
        Side::Human
    }
}

/// Компьютерный соперник: имя + стратегия (композиция, без наследования).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComputerPlayer<S> {
    pub name: String,
    pub strategy: S,
}

impl<S> ComputerPlayer<S> {
    pub fn new(name: impl Into<String>, strategy: S) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

impl<S> Competitor for ComputerPlayer<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Side {
        Side::Computer
    }
}

/// Имена соперников в Tic-Tac-Toe.
pub const TIC_TAC_TOE_NAMES: [&str; 4] = ["Hal", "RDX", "Robo", "Boxer"];

/// Имена дилеров в Twenty-One.
pub const DEALER_NAMES: [&str; 5] = ["R2D2", "ROBOT", "HAL", "ARNOLD", "RAMBO"];
