//! Три консольные игры против компьютера:
//! Rock-Paper-Scissors-Lizard-Spock, Tic-Tac-Toe и Twenty-One.
//!
//! Слои:
//! - `domain` – карты, доска, ходы, счёт, конфиги;
//! - `eval` – чистые функции оценки раунда;
//! - `engine` – стратегии соперников и машины состояний матчей/раундов;
//! - `infra` – реализации RNG;
//! - `api` – DTO для фронта;
//! - `console` – терминальный фронт (рендер, ввод, логирование).

pub mod api;
pub mod console;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
