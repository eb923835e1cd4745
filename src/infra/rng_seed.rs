//! RngSeed - доменный seed для RNG игр.
//!
//! Позволяет:
//!   - хранить базовый seed (u64 или [u8;32])
//!   - делать детерминированное hash-reseeding:
//!         new = H(domain || old || game || match_index)
//!   - создавать DeterministicRng из seed
//!
//! Один `--seed` в консоли даёт воспроизводимую серию матчей.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// Какая игра берёт seed (входит в хэш).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameKind {
    Rps,
    TicTacToe,
    TwentyOne,
}

impl GameKind {
    fn tag(self) -> &'static [u8] {
        match self {
            GameKind::Rps => b"RPS",
            GameKind::TicTacToe => b"TTT",
            GameKind::TwentyOne => b"T21",
        }
    }
}

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (флаг `--seed` и тесты).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed для конкретного матча конкретной игры.
    pub fn derive(&self, game: GameKind, match_index: u64) -> Self {
        let mut hasher = Sha256::new();

        // Доменный префикс
        hasher.update(b"PARLOR_GAMES_RNG_V1");

        // Старый seed
        hasher.update(self.bytes);

        hasher.update(game.tag());
        hasher.update(match_index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
