use serde::{Deserialize, Serialize};

use crate::domain::moves::Move;

/// Результат сравнения двух ходов (первый против второго).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Verdict {
    FirstWins,
    SecondWins,
    Tie,
}

impl Verdict {
    /// Тот же результат, если поменять аргументы местами.
    pub fn flipped(self) -> Verdict {
        match self {
            Verdict::FirstWins => Verdict::SecondWins,
            Verdict::SecondWins => Verdict::FirstWins,
            Verdict::Tie => Verdict::Tie,
        }
    }
}

/// Кто выигрывает раунд: граф "бьёт" фиксирован, у каждого хода две жертвы.
pub fn evaluate(a: Move, b: Move) -> Verdict {
    if a == b {
        Verdict::Tie
    } else if a.beats(b) {
        Verdict::FirstWins
    } else {
        Verdict::SecondWins
    }
}
