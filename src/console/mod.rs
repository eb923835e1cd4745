//! Консольный фронт: отрисовка, ввод с повтором, паузы, логирование.
//!
//! Ядро (`engine`) ничего не знает о терминале – бинарники склеивают
//! ввод из `prompt`, вызовы движка и вывод из `render`.

pub mod prompt;
pub mod render;
pub mod screen;

use clap::Args;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::engine::EngineError;

pub use screen::Screen;

/// Ошибки консольного фронта.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Ошибка ввода: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Ошибка терминала: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка движка: {0}")]
    Engine(#[from] EngineError),

    #[error("Ошибка сериализации: {0}")]
    Json(#[from] serde_json::Error),
}

/// Общие флаги всех трёх игр.
#[derive(Args, Clone, Debug, Default)]
pub struct SessionOptions {
    /// Seed для воспроизводимой сессии.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Не делать пауз между экранами.
    #[arg(long)]
    pub no_pause: bool,

    /// Напечатать итоговое состояние в JSON при выходе.
    #[arg(long)]
    pub json: bool,
}

/// Подписчик tracing: в stderr, уровень из RUST_LOG (по умолчанию warn),
/// чтобы логи не мешали игровому экрану.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
