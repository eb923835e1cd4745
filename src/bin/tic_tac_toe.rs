// src/bin/tic_tac_toe.rs

use clap::Parser;

use parlor_games::api::{build_tic_tac_toe_view, TicTacToeDto};
use parlor_games::console::{self, prompt, render, ConsoleError, Screen, SessionOptions};
use parlor_games::domain::config::TicTacToeConfig;
use parlor_games::domain::participant::{HumanPlayer, Side, TIC_TAC_TOE_NAMES};
use parlor_games::engine::{RandomSource, TicTacToeMatch};
use parlor_games::infra::{GameKind, SessionRng};

/// Tic-Tac-Toe против компьютера, до 5 побед.
#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe", version, about)]
struct Cli {
    #[command(flatten)]
    session: SessionOptions,
}

fn main() {
    console::init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(&cli.session) {
        eprintln!("[tic_tac_toe] {e}");
        std::process::exit(1);
    }
}

fn run(opts: &SessionOptions) -> Result<(), ConsoleError> {
    let screen = Screen::new(!opts.no_pause);
    screen.clear()?;

    let human = HumanPlayer::new(prompt::ask_name("Please enter your name:")?);
    screen.clear()?;
    println!("***Welcome to TicTacToe Game***");
    println!("\nAny player winning first 5 games is our Grand Winner.\n");

    let mut last_view: Option<TicTacToeDto> = None;
    let mut match_index: u64 = 0;

    loop {
        let mut rng = SessionRng::for_match(opts.seed, GameKind::TicTacToe, match_index);

        let config = TicTacToeConfig::new(prompt::ask_marker()?);
        let name_idx = rng.below(TIC_TAC_TOE_NAMES.len()) % TIC_TAC_TOE_NAMES.len();
        let mut game = TicTacToeMatch::new(human.clone(), TIC_TAC_TOE_NAMES[name_idx], config);
        println!("\n{} is your next challenger.\n", TIC_TAC_TOE_NAMES[name_idx]);

        while !game.is_complete() {
            let first = prompt::ask_first_mover()?;
            game.start_round(first)?;
            show(&screen, &game)?;

            while let Some(side) = game.side_to_move() {
                match side {
                    Side::Human => {
                        let open = game.board().empty_cells();
                        game.human_move(prompt::ask_cell(&open)?)?;
                    }
                    Side::Computer => {
                        game.computer_move(&mut rng)?;
                    }
                }
                show(&screen, &game)?;
            }

            let view = build_tic_tac_toe_view(&game);
            if let Some(outcome) = view.last_outcome {
                println!(
                    "{}",
                    render::outcome_line(outcome, &view.human_name, &view.computer_name)
                );
            }

            if !game.is_complete() {
                screen.wait_for_enter("Please hit enter to start next round.")?;
                screen.clear()?;
            }
        }

        let view = build_tic_tac_toe_view(&game);
        match game.winner() {
            Some(Side::Human) => println!("{} you are our Grand Master!", view.human_name),
            _ => println!("{} is Grand Master!", view.computer_name),
        }
        last_view = Some(view);

        if !prompt::ask_play_again()? {
            break;
        }
        println!("Let's play again!\n");
        match_index += 1;
        screen.clear()?;
    }

    println!("Thanks for playing Tic Tac Toe! Goodbye!");
    screen.pause(2);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&last_view)?);
    } else {
        screen.clear()?;
    }

    Ok(())
}

/// Счёт, маркеры и доска.
fn show(screen: &Screen, game: &TicTacToeMatch) -> Result<(), ConsoleError> {
    let view = build_tic_tac_toe_view(game);
    screen.clear()?;
    println!(
        "{}",
        render::score_line(&view.human_name, &view.computer_name, view.scores)
    );
    println!("{}\n", render::markers_line(&view));
    println!("{}", render::board(&view));
    Ok(())
}
