use std::thread;
use std::time::Duration;

use dialoguer::console::Term;
use dialoguer::Input;

use super::ConsoleError;

/// Экран терминала: очистка и паузы для "драматизма".
pub struct Screen {
    term: Term,
    pauses: bool,
}

impl Screen {
    pub fn new(pauses: bool) -> Self {
        Self {
            term: Term::stdout(),
            pauses,
        }
    }

    pub fn clear(&self) -> Result<(), ConsoleError> {
        self.term.clear_screen()?;
        Ok(())
    }

    /// Пауза в секундах. С `--no-pause` ничего не делает.
    pub fn pause(&self, secs: u64) {
        if self.pauses {
            thread::sleep(Duration::from_secs(secs));
        }
    }

    /// Ждать Enter.
    pub fn wait_for_enter(&self, prompt: &str) -> Result<(), ConsoleError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text()?;
        Ok(())
    }
}
