use colored::Colorize;

use crate::api::dto::{HandDto, RpsMatchDto, TicTacToeDto, TwentyOneDto, TwentyOneTableDto};
use crate::domain::participant::{RoundOutcome, Scoreboard};
use crate::eval::Resolution;

/// Таблица счёта: имена и очки обеих сторон.
pub fn score_line(human_name: &str, computer_name: &str, scores: Scoreboard) -> String {
    format!(
        "{}      SCORE\n{}: {}    ||    {}: {}\n",
        " ".repeat(human_name.chars().count()),
        human_name,
        scores.human,
        computer_name,
        scores.computer
    )
}

/// Строка итога раунда с подсветкой.
pub fn outcome_line(outcome: RoundOutcome, human_name: &str, computer_name: &str) -> String {
    match outcome {
        RoundOutcome::HumanWins => format!("{human_name} won!").green().bold().to_string(),
        RoundOutcome::ComputerWins => format!("{computer_name} won!").red().bold().to_string(),
        RoundOutcome::Tie => "It's a tie!".yellow().to_string(),
    }
}

/// История раундов RPS: номер, ход человека, ход компьютера, победитель.
pub fn rps_history(view: &RpsMatchDto) -> String {
    let len1 = view.human_name.chars().count();
    let len2 = view.computer_name.chars().count();

    let mut out = format!(
        "\nRound      {}      {}       Winner\n",
        view.human_name, view.computer_name
    );
    out.push_str(&"-".repeat(36 + len1 * 3 / 2));
    out.push('\n');

    for row in &view.history {
        out.push_str(&format!(
            "{:^5}{:^w1$}{:<10}{:>w2$}\n",
            row.round,
            row.human_move.name(),
            row.computer_move.name(),
            row.winner,
            w1 = len1 + 12,
            w2 = len2 + 2,
        ));
    }
    out
}

/// Доска 3x3 как в классическом терминальном варианте.
pub fn board(view: &TicTacToeDto) -> String {
    let mark = |i: usize| match view.cells.get(i).copied().flatten() {
        Some(m) => m.to_string(),
        None => " ".to_string(),
    };

    let mut out = String::new();
    for row in 0..3 {
        if row > 0 {
            out.push_str("-----+-----+-----\n");
        }
        out.push_str("     |     |\n");
        out.push_str(&format!(
            "  {}  |  {}  |  {}\n",
            mark(row * 3),
            mark(row * 3 + 1),
            mark(row * 3 + 2)
        ));
        out.push_str("     |     |\n");
    }
    out
}

/// "Alice you're a X. Hal is a O."
pub fn markers_line(view: &TicTacToeDto) -> String {
    format!(
        "{} you're a {}. {} is a {}.",
        view.human_name, view.human_marker, view.computer_name, view.computer_marker
    )
}

/// Карты участника + сумма по видимым картам.
pub fn hand(view: &HandDto) -> String {
    let mut out = format!("----{}'s Cards----\n", view.name);
    for card in &view.cards {
        out.push_str(&format!("=> {card}\n"));
    }
    if view.hidden_cards > 0 {
        out.push_str(".......?\n");
    } else {
        out.push_str(&format!("{}'s total is: {}.\n", view.name, view.total));
    }
    out
}

/// Объяснение итога раздачи.
pub fn resolution_line(view: &TwentyOneDto, resolution: Resolution) -> String {
    let player = &view.player.name;
    let dealer = &view.dealer.name;
    let text = match resolution {
        Resolution::PlayerBust => format!("{player} is busted! {dealer} wins!"),
        Resolution::DealerBust => format!("{dealer} is busted! {player} wins!"),
        Resolution::DealerBlackjack => format!("{dealer} has blackjack! {dealer} won!"),
        Resolution::PlayerHigher => format!("{player} won!"),
        Resolution::DealerHigher => format!("{dealer} won!"),
        Resolution::Push => "It's a tie!".to_string(),
    };

    match resolution.outcome() {
        RoundOutcome::HumanWins => text.green().bold().to_string(),
        RoundOutcome::ComputerWins => text.red().bold().to_string(),
        RoundOutcome::Tie => text.yellow().to_string(),
    }
}

/// Итоги серии за столом.
pub fn tally(view: &TwentyOneTableDto) -> String {
    format!(
        "Hands: {} | {}: {} | Dealer: {} | Ties: {}",
        view.hands, view.player_name, view.player_wins, view.dealer_wins, view.ties
    )
}
