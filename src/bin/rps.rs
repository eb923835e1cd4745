// src/bin/rps.rs

use clap::Parser;

use parlor_games::api::{build_rps_view, RpsMatchDto};
use parlor_games::console::{self, prompt, render, ConsoleError, Screen, SessionOptions};
use parlor_games::domain::participant::{HumanPlayer, Side};
use parlor_games::engine::RpsMatch;
use parlor_games::infra::{GameKind, SessionRng};

/// Rock, Paper, Scissors, Lizard, Spock против компьютера, до 10 побед.
#[derive(Parser, Debug)]
#[command(name = "rps", version, about)]
struct Cli {
    #[command(flatten)]
    session: SessionOptions,
}

fn main() {
    console::init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(&cli.session) {
        eprintln!("[rps] {e}");
        std::process::exit(1);
    }
}

fn run(opts: &SessionOptions) -> Result<(), ConsoleError> {
    let screen = Screen::new(!opts.no_pause);
    screen.clear()?;

    let human = HumanPlayer::new(prompt::ask_name("What's your name?")?);
    screen.clear()?;
    println!("Welcome to Rock, Paper, Scissors, Lizard and Spock Game!");
    println!("Player winning first 10 games will be our Grand Winner.");

    let mut last_view: Option<RpsMatchDto> = None;
    let mut match_index: u64 = 0;

    loop {
        let mut rng = SessionRng::for_match(opts.seed, GameKind::Rps, match_index);
        let mut game = RpsMatch::with_random_opponent(human.clone(), &mut rng);
        println!("{} is your challenger.", game.personality());

        while !game.is_complete() {
            let view = build_rps_view(&game);
            println!(
                "\n\n{}",
                render::score_line(&view.human_name, &view.computer_name, view.scores)
            );

            let human_move = prompt::ask_rps_move()?;
            let round = game.play_round(human_move, &mut rng)?;
            screen.clear()?;

            let view = build_rps_view(&game);
            println!("{} choose {}.", view.human_name, round.human);
            println!("{} choose {}.", view.computer_name, round.computer);
            println!(
                "{}",
                render::outcome_line(round.outcome, &view.human_name, &view.computer_name)
            );
            println!("{}", render::rps_history(&view));
        }

        let view = build_rps_view(&game);
        println!(
            "\n\n{}",
            render::score_line(&view.human_name, &view.computer_name, view.scores)
        );
        match view.grand_winner {
            Some(Side::Human) => println!("{} is our Grand Master.", view.human_name),
            _ => println!("{} is our Grand Master.", view.computer_name),
        }
        last_view = Some(view);

        if !prompt::ask_play_again()? {
            break;
        }
        match_index += 1;
        screen.clear()?;
    }

    println!("Thanks for playing Rock, Paper, Scissors, Lizard and Spock. Good bye!");
    screen.pause(2);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&last_view)?);
    } else {
        screen.clear()?;
    }

    Ok(())
}
