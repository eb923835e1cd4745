//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации (системный, детерминированный, скриптованный);
//! - доменный seed для воспроизводимых сессий.

pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::{GameKind, RngSeed};
