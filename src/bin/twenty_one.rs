// src/bin/twenty_one.rs

use clap::Parser;

use parlor_games::api::{build_table_view, build_twenty_one_view};
use parlor_games::console::{self, prompt, render, ConsoleError, Screen, SessionOptions};
use parlor_games::domain::participant::HumanPlayer;
use parlor_games::engine::{Decision, Stage, TwentyOneTable};
use parlor_games::infra::{GameKind, SessionRng};

/// Twenty-One против дилера: одна раздача, затем предложение реванша.
#[derive(Parser, Debug)]
#[command(name = "twenty_one", version, about)]
struct Cli {
    #[command(flatten)]
    session: SessionOptions,
}

fn main() {
    console::init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(&cli.session) {
        eprintln!("[twenty_one] {e}");
        std::process::exit(1);
    }
}

fn run(opts: &SessionOptions) -> Result<(), ConsoleError> {
    let screen = Screen::new(!opts.no_pause);
    screen.clear()?;

    let player = HumanPlayer::new(prompt::ask_name("Please enter your name:")?);
    let mut table = TwentyOneTable::new(player);

    screen.clear()?;
    println!("***Welcome to Twenty-One Game.***\n");

    let mut hand_index: u64 = 0;

    loop {
        let mut rng = SessionRng::for_match(opts.seed, GameKind::TwentyOne, hand_index);

        let dealer_name = table.start_hand(&mut rng)?.dealer_name().to_string();
        println!("Your challenger is {dealer_name}.\n");
        screen.wait_for_enter("Please hit enter to start dealing the cards.")?;
        screen.clear()?;
        println!("Dealing Cards to player's...");
        screen.pause(2);
        screen.clear()?;

        show_hands(&table);

        let mut stage = current_stage(&table);
        while stage == Stage::PlayerTurn {
            let decision = prompt::ask_hit_or_stay()?;
            screen.clear()?;
            if decision == Decision::Hit {
                println!("{} hits!", table.player().name);
            }
            stage = table.decide(decision, &mut rng)?;
            show_hands(&table);
        }

        if stage == Stage::DealerTurn {
            screen.clear()?;
            println!("{dealer_name}'s turn.");
            screen.pause(1);
            table.finish_dealer(&mut rng)?;
        }

        screen.clear()?;
        show_hands(&table);
        let view = build_table_view(&table);
        if let Some(current) = &view.current {
            if let Some(resolution) = current.resolution {
                println!("{}", render::resolution_line(current, resolution));
            }
        }
        println!("{}", render::tally(&view));

        if !prompt::ask_play_again()? {
            break;
        }
        hand_index += 1;
        screen.clear()?;
    }

    println!("\nThank you for playing Twenty-One Game.");
    screen.pause(2);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&build_table_view(&table))?);
    } else {
        screen.clear()?;
    }

    Ok(())
}

fn current_stage(table: &TwentyOneTable) -> Stage {
    table.round().map(|r| r.stage()).unwrap_or(Stage::Dealing)
}

/// Руки игрока и дилера (у дилера до конца раздачи видна одна карта).
fn show_hands(table: &TwentyOneTable) {
    if let Some(round) = table.round() {
        let view = build_twenty_one_view(&table.player().name, round);
        println!("{}", render::hand(&view.player));
        println!("{}", render::hand(&view.dealer));
    }
}
