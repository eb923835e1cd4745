use crate::domain::config::{RPS_TARGET_WINS, TTT_TARGET_WINS};
use crate::domain::hand::Hand;
use crate::domain::participant::{Competitor, RoundOutcome};
use crate::engine::{RpsMatch, Stage, TicTacToeMatch, TwentyOneRound, TwentyOneTable};
use crate::eval::hand_total;

use super::dto::{
    HandDto, RpsMatchDto, RpsRoundDto, TicTacToeDto, TwentyOneDto, TwentyOneTableDto,
};

/// Сформировать DTO матча RPS (счёт + вся история).
pub fn build_rps_view(m: &RpsMatch) -> RpsMatchDto {
    let human_name = m.human().name().to_string();
    let computer_name = m.computer().name().to_string();

    let history = m
        .history()
        .iter()
        .map(|r| RpsRoundDto {
            round: r.number,
            human_move: r.human,
            computer_move: r.computer,
            winner: match r.outcome {
                RoundOutcome::HumanWins => human_name.clone(),
                RoundOutcome::ComputerWins => computer_name.clone(),
                RoundOutcome::Tie => "Draw".to_string(),
            },
        })
        .collect();

    RpsMatchDto {
        human_name,
        computer_name,
        scores: m.scores(),
        target_wins: RPS_TARGET_WINS,
        rounds_played: m.rounds_played(),
        history,
        grand_winner: m.winner(),
    }
}

/// Сформировать DTO матча Tic-Tac-Toe.
pub fn build_tic_tac_toe_view(m: &TicTacToeMatch) -> TicTacToeDto {
    let config = m.config();
    TicTacToeDto {
        human_name: m.human().name().to_string(),
        computer_name: m.computer().name().to_string(),
        human_marker: config.human_marker,
        computer_marker: config.computer_marker(),
        cells: m.board().cells().to_vec(),
        open_cells: m.board().empty_cells().iter().map(|c| c.index()).collect(),
        scores: m.scores(),
        target_wins: TTT_TARGET_WINS,
        round: m.rounds_started(),
        phase: m.phase(),
        last_outcome: m.last_outcome(),
    }
}

fn hand_view(name: &str, hand: &Hand, visible: usize) -> HandDto {
    let shown = Hand::from_cards(hand.cards()[..visible].to_vec());
    HandDto {
        name: name.to_string(),
        total: hand_total(&shown),
        cards: shown.cards().to_vec(),
        hidden_cards: hand.len() - visible,
    }
}

/// Сформировать DTO раздачи. Скрытые карты дилера в DTO не попадают.
pub fn build_twenty_one_view(player_name: &str, round: &TwentyOneRound) -> TwentyOneDto {
    let player = round.player_hand();
    let dealer = round.dealer_hand();

    let stage = match round.stage() {
        Stage::Dealing => "dealing",
        Stage::PlayerTurn => "player_turn",
        Stage::DealerTurn => "dealer_turn",
        Stage::Resolved(_) => "resolved",
    };

    TwentyOneDto {
        player: hand_view(player_name, player, player.len()),
        dealer: hand_view(
            round.dealer_name(),
            dealer,
            round.visible_dealer_cards().len(),
        ),
        stage: stage.to_string(),
        resolution: round.resolution(),
        outcome: round.resolution().map(|r| r.outcome()),
    }
}

/// Сформировать DTO стола (серия + текущая раздача).
pub fn build_table_view(table: &TwentyOneTable) -> TwentyOneTableDto {
    let tally = table.tally();
    let player_name = table.player().name();
    TwentyOneTableDto {
        player_name: player_name.to_string(),
        player_wins: tally.scores.human,
        dealer_wins: tally.scores.computer,
        ties: tally.ties,
        hands: tally.hands,
        current: table
            .round()
            .map(|r| build_twenty_one_view(player_name, r)),
    }
}
