//! Движок игр: стратегии соперников и машины состояний.
//!
//! Высокоуровневые объекты:
//!   - `RpsMatch` – матч до 10 побед;
//!   - `TicTacToeMatch` – матч до 5 побед, раунды с чередованием ходов;
//!   - `TwentyOneRound` / `TwentyOneTable` – раздача и серия раздач.

pub mod dealer;
pub mod errors;
pub mod history;
pub mod personality;
pub mod rps_match;
pub mod strategy;
pub mod table;
pub mod ttt_match;
pub mod ttt_opponent;
pub mod twenty_one;

pub use dealer::{DealerDecision, DealerPolicy};
pub use errors::EngineError;
pub use history::{History, HistoryEntry};
pub use personality::Personality;
pub use rps_match::{MatchStatus, RpsMatch, RpsRound};
pub use strategy::Strategy;
pub use table::{SessionTally, TwentyOneTable};
pub use ttt_match::{Phase, TicTacToeMatch, TttEvent, TurnReport};
pub use ttt_opponent::{choose_move, BlockingOpponent};
pub use twenty_one::{Decision, Seat, Stage, TableEvent, TwentyOneRound};

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`) и в тестах (скрипты).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерное число из `0..upper`. Для `upper == 0` возвращает 0.
    fn below(&mut self, upper: usize) -> usize;

    /// Индекс по таблице весов.
    /// По умолчанию – один бросок `below(сумма весов)` и проход по накопленным весам.
    fn pick_weighted(&mut self, weights: &[u32]) -> usize {
        let total: u32 = weights.iter().sum();
        let mut roll = self.below(total as usize) as u32;
        for (idx, w) in weights.iter().enumerate() {
            if roll < *w {
                return idx;
            }
            roll -= w;
        }
        weights.len().saturating_sub(1)
    }
}
