use dialoguer::{Confirm, Input};

use crate::domain::board::{Cell, Marker};
use crate::domain::moves::Move;
use crate::domain::participant::Side;
use crate::engine::Decision;

use super::ConsoleError;

/// Имя: без пробелов по краям, первая буква заглавная, остальные строчные.
/// Пустое имя – `None`.
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    let mut name: String = first.to_uppercase().collect();
    name.push_str(&chars.as_str().to_lowercase());
    Some(name)
}

/// "1, 2, 3 or 4" – перечисление для подсказки.
pub fn joinor<T: ToString>(items: &[T], punctuation: &str, word: &str) -> String {
    let parts: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    match parts.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [a, b] => format!("{a} {word} {b}"),
        [head @ .., last] => format!("{} {word} {last}", head.join(punctuation)),
    }
}

pub fn ask_name(prompt: &str) -> Result<String, ConsoleError> {
    let raw: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|s: &String| -> Result<(), &str> {
            match normalize_name(s) {
                Some(_) => Ok(()),
                None => Err("Sorry, must enter a value."),
            }
        })
        .interact_text()?;

    Ok(normalize_name(&raw).unwrap_or(raw))
}

/// Ход RPS: клавиша или полное имя. Неверный ввод переспрашивается.
pub fn ask_rps_move() -> Result<Move, ConsoleError> {
    let mv: Move = Input::new()
        .with_prompt(
            "Please choose (r, p, s, l or k) for (rock, paper, scissors, lizard or spock)",
        )
        .interact_text()?;
    Ok(mv)
}

pub fn ask_marker() -> Result<Marker, ConsoleError> {
    let marker: Marker = Input::new()
        .with_prompt("Which marker would you like to use for this game? (X or O)")
        .interact_text()?;
    Ok(marker)
}

pub fn ask_first_mover() -> Result<Side, ConsoleError> {
    let answer: String = Input::new()
        .with_prompt("Decide who moves first. ('c' for computer, 'p' for you)")
        .validate_with(|s: &String| -> Result<(), &str> {
            match s.trim().to_lowercase().as_str() {
                "c" | "p" => Ok(()),
                _ => Err("Must enter 'c' or 'p'."),
            }
        })
        .interact_text()?;

    Ok(if answer.trim().eq_ignore_ascii_case("p") {
        Side::Human
    } else {
        Side::Computer
    })
}

/// Клетка из списка свободных.
pub fn ask_cell(open: &[Cell]) -> Result<Cell, ConsoleError> {
    let cell: Cell = Input::new()
        .with_prompt(format!("Choose a square between ({})", joinor(open, ", ", "or")))
        .validate_with(|c: &Cell| -> Result<(), &str> {
            if open.contains(c) {
                Ok(())
            } else {
                Err("Sorry, that's not a valid choice.")
            }
        })
        .interact_text()?;
    Ok(cell)
}

pub fn ask_hit_or_stay() -> Result<Decision, ConsoleError> {
    let answer: String = Input::new()
        .with_prompt("Would you like to (h)it or (s)tay?")
        .validate_with(|s: &String| -> Result<(), &str> {
            match s.trim().to_lowercase().as_str() {
                "h" | "s" => Ok(()),
                _ => Err("Sorry, must enter 'h' or 's'."),
            }
        })
        .interact_text()?;

    Ok(if answer.trim().eq_ignore_ascii_case("h") {
        Decision::Hit
    } else {
        Decision::Stay
    })
}

pub fn ask_play_again() -> Result<bool, ConsoleError> {
    let again = Confirm::new()
        .with_prompt("Would you like to play again?")
        .interact()?;
    Ok(again)
}
