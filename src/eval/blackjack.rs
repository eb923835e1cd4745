use serde::{Deserialize, Serialize};

use crate::domain::config::BLACKJACK;
use crate::domain::hand::Hand;
use crate::domain::participant::RoundOutcome;

/// Сумма очков руки.
///
/// Каждый туз сначала считается за 11. Затем, пока сумма больше 21,
/// тузы по одному понижаются до 1 (минус 10 за туз).
pub fn hand_total(hand: &Hand) -> u32 {
    let mut total: u32 = hand.cards().iter().map(|c| c.face.points()).sum();

    for _ in 0..hand.ace_count() {
        if total <= BLACKJACK {
            break;
        }
        total -= 10;
    }

    total
}

/// Перебор: больше 21.
pub fn is_bust(hand: &Hand) -> bool {
    hand_total(hand) > BLACKJACK
}

/// Ровно 21 (любым количеством карт).
pub fn is_blackjack(hand: &Hand) -> bool {
    hand_total(hand) == BLACKJACK
}

/// Как закончилась раздача. Порядок проверок фиксирован:
/// перебор игрока, перебор дилера, 21 у дилера, сравнение сумм.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Resolution {
    PlayerBust,
    DealerBust,
    DealerBlackjack,
    PlayerHigher,
    DealerHigher,
    Push,
}

impl Resolution {
    pub fn outcome(self) -> RoundOutcome {
        match self {
            Resolution::PlayerBust | Resolution::DealerBlackjack | Resolution::DealerHigher => {
                RoundOutcome::ComputerWins
            }
            Resolution::DealerBust | Resolution::PlayerHigher => RoundOutcome::HumanWins,
            Resolution::Push => RoundOutcome::Tie,
        }
    }
}

/// Определить итог раздачи по двум рукам.
pub fn resolve(player: &Hand, dealer: &Hand) -> Resolution {
    if is_bust(player) {
        return Resolution::PlayerBust;
    }
    if is_bust(dealer) {
        return Resolution::DealerBust;
    }
    if is_blackjack(dealer) {
        return Resolution::DealerBlackjack;
    }

    let (p, d) = (hand_total(player), hand_total(dealer));
    match p.cmp(&d) {
        std::cmp::Ordering::Greater => Resolution::PlayerHigher,
        std::cmp::Ordering::Less => Resolution::DealerHigher,
        std::cmp::Ordering::Equal => Resolution::Push,
    }
}
