use std::collections::VecDeque;

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::engine::RandomSource;
use crate::infra::rng_seed::{GameKind, RngSeed};

/// Боевой RNG: `rand::thread_rng`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut thread_rng());
    }

    fn below(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        thread_rng().gen_range(0..upper)
    }

    fn pick_weighted(&mut self, weights: &[u32]) -> usize {
        match WeightedIndex::new(weights) {
            Ok(dist) => dist.sample(&mut thread_rng()),
            Err(_) => 0,
        }
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же матчи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn below(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.inner.gen_range(0..upper)
    }

    fn pick_weighted(&mut self, weights: &[u32]) -> usize {
        match WeightedIndex::new(weights) {
            Ok(dist) => dist.sample(&mut self.inner),
            Err(_) => 0,
        }
    }
}

/// RNG по заранее заданному сценарию.
///
/// - `below(n)` отдаёт следующее число сценария по модулю `n`;
/// - `shuffle` переставляет элемент с номером из сценария в конец среза
///   (так `Deck::deal_one` выдаёт нужную карту), остальные не трогает;
/// - `pick_weighted` – общий проход по накопленным весам поверх `below`.
///
/// Когда сценарий кончился, отдаются нули.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: VecDeque<usize>,
}

impl ScriptedRng {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn push(&mut self, value: usize) {
        self.script.push_back(value);
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn next_value(&mut self) -> usize {
        self.script.pop_front().unwrap_or(0)
    }
}

impl RandomSource for ScriptedRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        if slice.is_empty() {
            return;
        }
        let idx = self.next_value() % slice.len();
        let last = slice.len() - 1;
        slice.swap(idx, last);
    }

    fn below(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.next_value() % upper
    }
}

/// RNG сессии консоли: системный или выведенный из `--seed`.
#[derive(Clone, Debug)]
pub enum SessionRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl SessionRng {
    /// RNG для матча `match_index`: с seed – воспроизводимый, без – системный.
    pub fn for_match(seed: Option<u64>, game: GameKind, match_index: u64) -> Self {
        match seed {
            Some(seed) => {
                SessionRng::Seeded(RngSeed::from_u64(seed).derive(game, match_index).to_rng())
            }
            None => SessionRng::System(SystemRng),
        }
    }
}

impl RandomSource for SessionRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            SessionRng::System(r) => r.shuffle(slice),
            SessionRng::Seeded(r) => r.shuffle(slice),
        }
    }

    fn below(&mut self, upper: usize) -> usize {
        match self {
            SessionRng::System(r) => r.below(upper),
            SessionRng::Seeded(r) => r.below(upper),
        }
    }

    fn pick_weighted(&mut self, weights: &[u32]) -> usize {
        match self {
            SessionRng::System(r) => r.pick_weighted(weights),
            SessionRng::Seeded(r) => r.pick_weighted(weights),
        }
    }
}
