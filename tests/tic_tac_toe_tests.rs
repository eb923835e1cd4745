//! Tic-Tac-Toe: проверки доски, выбор клетки компьютером, матч до 5 побед.

use parlor_games::domain::board::{Board, Cell, Marker};
use parlor_games::domain::config::TicTacToeConfig;
use parlor_games::domain::participant::{HumanPlayer, RoundOutcome, Side};
use parlor_games::engine::{
    choose_move, EngineError, Phase, RandomSource, TicTacToeMatch, TttEvent,
};
use parlor_games::eval::{at_risk_cell, is_full, is_won, round_result, winner};
use parlor_games::infra::{DeterministicRng, ScriptedRng};

fn cell(i: u8) -> Cell {
    Cell::new(i).expect("cell in 1..=9")
}

fn board_with(xs: &[u8], os: &[u8]) -> Board {
    let mut b = Board::new();
    for i in xs {
        assert!(b.place(cell(*i), Marker::X));
    }
    for i in os {
        assert!(b.place(cell(*i), Marker::O));
    }
    b
}

fn new_match(human_marker: Marker) -> TicTacToeMatch {
    TicTacToeMatch::new(
        HumanPlayer::new("Alice"),
        "Hal",
        TicTacToeConfig::new(human_marker),
    )
}

//
// TEST 1 - проверки доски
//
#[test]
fn top_row_is_a_win() {
    let b = board_with(&[1, 2, 3], &[]);
    assert!(is_won(&b, Marker::X));
    assert!(!is_won(&b, Marker::O));
    assert_eq!(winner(&b), Some(Marker::X));
}

#[test]
fn empty_board_has_no_winner() {
    let b = Board::new();
    assert!(!is_won(&b, Marker::X));
    assert!(!is_won(&b, Marker::O));
    assert!(!is_full(&b));
    assert_eq!(round_result(&b), None);
}

#[test]
fn diagonals_and_columns_count() {
    assert!(is_won(&board_with(&[3, 5, 7], &[]), Marker::X));
    assert!(is_won(&board_with(&[], &[2, 5, 8]), Marker::O));
    assert!(!is_won(&board_with(&[1, 2, 4], &[]), Marker::X));
}

#[test]
fn full_board_without_line_is_a_tie() {
    // X O X
    // X O O
    // O X X
    let b = board_with(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
    assert!(is_full(&b));
    assert_eq!(winner(&b), None);
    assert_eq!(round_result(&b), Some(None));
}

#[test]
fn at_risk_cell_finds_first_open_threat() {
    let b = board_with(&[1, 2], &[]);
    assert_eq!(at_risk_cell(&b, Marker::X), Some(cell(3)));

    // Третья клетка занята – угрозы нет.
    let b = board_with(&[1, 2], &[3]);
    assert_eq!(at_risk_cell(&b, Marker::X), None);

    // Две угрозы: берётся первая по порядку линий (строка раньше столбца).
    let b = board_with(&[1, 2, 4], &[]);
    assert_eq!(at_risk_cell(&b, Marker::X), Some(cell(3)));
}

//
// TEST 2 - исчерпывающий перебор партий: двух победителей не бывает
//
fn explore(board: &Board, to_move: Marker, games: &mut u32) {
    let x = is_won(board, Marker::X);
    let o = is_won(board, Marker::O);
    assert!(!(x && o), "both markers won on {board:?}");

    if x || o || is_full(board) {
        *games += 1;
        return;
    }

    for c in board.empty_cells() {
        let mut next = board.clone();
        assert!(next.place(c, to_move));
        explore(&next, to_move.other(), games);
    }
}

#[test]
fn no_reachable_position_has_two_winners() {
    let mut games = 0;
    explore(&Board::new(), Marker::X, &mut games);
    // Классическое число различных партий 3x3.
    assert_eq!(games, 255_168);
}

//
// TEST 3 - выбор клетки компьютером
//
#[test]
fn opponent_blocks_for_every_seed() {
    let b = board_with(&[1, 2], &[5]);
    for seed in 0..50 {
        let mut rng = DeterministicRng::from_u64(seed);
        let c = choose_move(&b, Marker::O, Marker::X, &mut rng).unwrap();
        assert_eq!(c, cell(3), "seed {seed}");
    }
}

#[test]
fn empty_board_takes_center() {
    let mut rng = ScriptedRng::new([7]);
    let c = choose_move(&Board::new(), Marker::O, Marker::X, &mut rng).unwrap();
    assert_eq!(c, Cell::CENTER);
    // Случайность не понадобилась.
    assert_eq!(rng.remaining(), 1);
}

#[test]
fn falls_back_to_random_open_cell() {
    let b = board_with(&[5], &[]);
    // Свободные: 1,2,3,4,6,7,8,9 – индекс 3 = клетка 4.
    let mut rng = ScriptedRng::new([3]);
    let c = choose_move(&b, Marker::O, Marker::X, &mut rng).unwrap();
    assert_eq!(c, cell(4));
}

#[test]
fn random_choice_is_always_open() {
    let b = board_with(&[5, 1], &[9]);
    for seed in 0..100 {
        let mut rng = DeterministicRng::from_u64(seed);
        let c = choose_move(&b, Marker::O, Marker::X, &mut rng).unwrap();
        assert!(b.is_empty_cell(c), "seed {seed} picked {c}");
    }
}

#[test]
fn does_not_look_for_own_win() {
    // У O есть 1 и 2, но компьютер закрывает угрозу X в 4-5-6.
    let b = board_with(&[4, 5], &[1, 2]);
    let mut rng = ScriptedRng::default();
    assert_eq!(choose_move(&b, Marker::O, Marker::X, &mut rng).unwrap(), cell(6));

    // Угроз нет – центр, а не своя тройка.
    let b = board_with(&[9], &[1, 2]);
    assert_eq!(choose_move(&b, Marker::O, Marker::X, &mut rng).unwrap(), Cell::CENTER);
}

#[test]
fn full_board_is_an_error() {
    let b = board_with(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
    let mut rng = ScriptedRng::default();
    assert_eq!(
        choose_move(&b, Marker::O, Marker::X, &mut rng),
        Err(EngineError::BoardFull)
    );
}

#[test]
fn identical_markers_are_rejected() {
    let mut rng = ScriptedRng::default();
    assert!(matches!(
        choose_move(&Board::new(), Marker::X, Marker::X, &mut rng),
        Err(EngineError::Internal(_))
    ));
}

//
// TEST 4 - матч
//
#[test]
fn computer_blocks_after_two_human_moves() {
    let mut game = new_match(Marker::X);
    let mut rng = ScriptedRng::default();

    game.start_round(Side::Human).unwrap();
    assert_eq!(game.phase(), Phase::AwaitingMove(Marker::X));

    game.human_move(cell(1)).unwrap();
    let reply = game.computer_move(&mut rng).unwrap();
    assert_eq!(reply.cell, cell(5));
    assert_eq!(reply.side, Side::Computer);

    game.human_move(cell(2)).unwrap();
    let reply = game.computer_move(&mut rng).unwrap();
    assert_eq!(reply.cell, cell(3));
    assert_eq!(reply.round_over, None);

    assert_eq!(game.board().get(cell(3)), Some(Marker::O));
    assert_eq!(game.side_to_move(), Some(Side::Human));
}

#[test]
fn final_move_still_flips_marker() {
    let mut game = new_match(Marker::O);
    game.start_round(Side::Human).unwrap();
    let mut rng = ScriptedRng::new([0]);

    game.human_move(cell(1)).unwrap();
    assert_eq!(game.computer_move(&mut rng).unwrap().cell, cell(5));
    game.human_move(cell(9)).unwrap();
    // Угроз нет, центр занят: свободные 2,3,4,6,7,8, индекс 0.
    assert_eq!(game.computer_move(&mut rng).unwrap().cell, cell(2));
    game.human_move(cell(8)).unwrap();
    // O грозит 7-8-9.
    assert_eq!(game.computer_move(&mut rng).unwrap().cell, cell(7));
    game.human_move(cell(3)).unwrap();
    // O грозит 3-6-9.
    assert_eq!(game.computer_move(&mut rng).unwrap().cell, cell(6));

    assert_eq!(game.marker_to_move(), Marker::O);
    let last = game.human_move(cell(4)).unwrap();

    assert_eq!(last.round_over, Some(RoundOutcome::Tie));
    assert_eq!(game.marker_to_move(), Marker::X);
    assert_eq!(game.side_to_move(), None);
    assert_eq!(game.phase(), Phase::RoundComplete(RoundOutcome::Tie));
    assert_eq!(game.scores().human, 0);
    assert_eq!(game.scores().computer, 0);
}

#[test]
fn human_fork_wins_the_round() {
    let mut game = new_match(Marker::X);
    game.start_round(Side::Human).unwrap();
    // Случайный ход: свободные 2,3,4,6,7,8, индекс 1.
    let mut rng = ScriptedRng::new([1]);

    game.human_move(cell(1)).unwrap();
    assert_eq!(game.computer_move(&mut rng).unwrap().cell, cell(5));
    game.human_move(cell(9)).unwrap();
    assert_eq!(game.computer_move(&mut rng).unwrap().cell, cell(3));

    // Вилка: 7-8-9 и 1-4-7. Закрыть можно только первую по порядку линий.
    game.human_move(cell(7)).unwrap();
    assert_eq!(game.computer_move(&mut rng).unwrap().cell, cell(8));

    let last = game.human_move(cell(4)).unwrap();
    assert_eq!(last.round_over, Some(RoundOutcome::HumanWins));
    assert_eq!(game.scores().human, 1);
    assert_eq!(game.scores().computer, 0);
    assert_eq!(game.last_outcome(), Some(RoundOutcome::HumanWins));
    assert_eq!(
        game.history().last(),
        Some(&TttEvent::RoundFinished {
            round: 1,
            outcome: RoundOutcome::HumanWins
        })
    );
}

#[test]
fn start_round_sets_first_mover() {
    let mut game = new_match(Marker::O);
    game.start_round(Side::Computer).unwrap();
    assert_eq!(game.side_to_move(), Some(Side::Computer));
    assert_eq!(game.marker_to_move(), Marker::X);
    assert_eq!(game.rounds_started(), 1);

    assert_eq!(
        game.history().last(),
        Some(&TttEvent::RoundStarted {
            round: 1,
            first: Marker::X
        })
    );
}

//
// TEST 5 - ошибки
//
#[test]
fn move_before_round_fails() {
    let mut game = new_match(Marker::X);
    assert_eq!(game.phase(), Phase::Ready);
    assert_eq!(game.human_move(cell(1)), Err(EngineError::RoundNotInProgress));

    let mut rng = ScriptedRng::default();
    assert_eq!(
        game.computer_move(&mut rng),
        Err(EngineError::RoundNotInProgress)
    );
}

#[test]
fn wrong_turn_and_occupied_cell() {
    let mut game = new_match(Marker::X);
    game.start_round(Side::Human).unwrap();
    game.human_move(cell(5)).unwrap();

    assert_eq!(
        game.human_move(cell(1)),
        Err(EngineError::NotYourTurn(Side::Human))
    );

    let mut rng = ScriptedRng::new([0]);
    game.computer_move(&mut rng).unwrap();
    assert_eq!(game.human_move(cell(5)), Err(EngineError::CellOccupied(cell(5))));

    // Ошибка не меняет очередь.
    assert_eq!(game.side_to_move(), Some(Side::Human));
}

#[test]
fn second_start_while_active_fails() {
    let mut game = new_match(Marker::X);
    game.start_round(Side::Human).unwrap();
    assert_eq!(game.start_round(Side::Human), Err(EngineError::RoundInProgress));
}

//
// TEST 6 - полный матч
//
#[test]
fn random_matches_end_at_five_wins() {
    for seed in 0..10u64 {
        let mut rng = DeterministicRng::from_u64(seed);
        let mut game = new_match(if seed % 2 == 0 { Marker::X } else { Marker::O });
        let mut rounds = 0;

        while !game.is_complete() {
            let first = if rng.below(2) == 0 { Side::Human } else { Side::Computer };
            game.start_round(first).unwrap();

            while let Some(side) = game.side_to_move() {
                match side {
                    Side::Human => {
                        let open = game.board().empty_cells();
                        let c = open[rng.below(open.len())];
                        game.human_move(c).unwrap();
                    }
                    Side::Computer => {
                        game.computer_move(&mut rng).unwrap();
                    }
                }
            }

            rounds += 1;
            assert!(rounds < 1_000, "match never ended for seed {seed}");
        }

        let s = game.scores();
        assert!(s.human == 5 || s.computer == 5);
        assert!(s.human.min(s.computer) < 5);
        assert!(matches!(game.phase(), Phase::MatchComplete(_)));
        assert_eq!(game.start_round(Side::Human), Err(EngineError::MatchComplete));
    }
}

#[test]
fn computer_marker_is_the_other_one() {
    assert_eq!(TicTacToeConfig::new(Marker::O).computer_marker(), Marker::X);
    assert_eq!(TicTacToeConfig::default().human_marker, Marker::X);

    let game = new_match(Marker::O);
    assert_eq!(game.marker_of(Side::Computer), Marker::X);
    assert_eq!(game.side_of(Marker::O), Side::Human);
}
