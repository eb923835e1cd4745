use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::moves::Move;
use crate::engine::errors::EngineError;
use crate::engine::strategy::Strategy;
use crate::engine::RandomSource;

/// Характер компьютерного соперника в RPS.
/// Имя соперника совпадает с именем характера.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Personality {
    /// Только rock или spock, поровну.
    R2D2,
    /// 70% – scissors/lizard поровну, 10% – spock, 20% – rock.
    Hal,
    /// 60% – paper/rock поровну, 30% – paper/lizard поровну, 10% – spock.
    Chappie,
    /// Равномерно по всем пяти ходам.
    Sonny,
}

const R2D2_TABLE: [(Move, u32); 2] = [(Move::Rock, 1), (Move::Spock, 1)];

const HAL_TABLE: [(Move, u32); 4] = [
    (Move::Scissors, 7),
    (Move::Lizard, 7),
    (Move::Spock, 2),
    (Move::Rock, 4),
];

const CHAPPIE_TABLE: [(Move, u32); 4] = [
    (Move::Paper, 9),
    (Move::Rock, 6),
    (Move::Lizard, 3),
    (Move::Spock, 2),
];

const SONNY_TABLE: [(Move, u32); 5] = [
    (Move::Rock, 1),
    (Move::Paper, 1),
    (Move::Scissors, 1),
    (Move::Lizard, 1),
    (Move::Spock, 1),
];

impl Personality {
    pub const ALL: [Personality; 4] = [
        Personality::R2D2,
        Personality::Hal,
        Personality::Chappie,
        Personality::Sonny,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Personality::R2D2 => "R2D2",
            Personality::Hal => "Hal",
            Personality::Chappie => "Chappie",
            Personality::Sonny => "Sonny",
        }
    }

    /// Таблица распределения: (ход, вес). Вероятность = вес / сумма весов.
    pub fn table(self) -> &'static [(Move, u32)] {
        match self {
            Personality::R2D2 => &R2D2_TABLE,
            Personality::Hal => &HAL_TABLE,
            Personality::Chappie => &CHAPPIE_TABLE,
            Personality::Sonny => &SONNY_TABLE,
        }
    }

    pub fn total_weight(self) -> u32 {
        self.table().iter().map(|(_, w)| w).sum()
    }

    /// Вероятность хода для этого характера.
    pub fn probability(self, mv: Move) -> f64 {
        let weight: u32 = self
            .table()
            .iter()
            .filter(|(m, _)| *m == mv)
            .map(|(_, w)| w)
            .sum();
        f64::from(weight) / f64::from(self.total_weight())
    }

    /// Выбрать ход по таблице весов.
    pub fn pick<R: RandomSource>(self, rng: &mut R) -> Move {
        let table = self.table();
        let weights: Vec<u32> = table.iter().map(|(_, w)| *w).collect();
        let idx = rng.pick_weighted(&weights).min(table.len() - 1);
        table[idx].0
    }

    /// Соперник на матч выбирается равновероятно.
    pub fn random<R: RandomSource>(rng: &mut R) -> Personality {
        Self::ALL[rng.below(Self::ALL.len()).min(Self::ALL.len() - 1)]
    }
}

impl Strategy for Personality {
    type View = ();
    type Action = Move;

    fn choose<R: RandomSource>(&self, _view: &(), rng: &mut R) -> Result<Move, EngineError> {
        Ok(self.pick(rng))
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
