use parlor_games::domain::board::{Board, Cell, Marker};
use parlor_games::domain::card::{Card, Face, Suit};
use parlor_games::domain::deck::Deck;
use parlor_games::domain::moves::Move;
use parlor_games::domain::participant::{
    Competitor, ComputerPlayer, HumanPlayer, RoundOutcome, Scoreboard, Side,
};

#[test]
fn card_display_and_parse() {
    let ace: Card = "Ah".parse().unwrap();
    assert_eq!(ace, Card::new(Suit::Hearts, Face::Ace));
    assert_eq!(ace.to_string(), "A of Hearts");

    let ten: Card = "10c".parse().unwrap();
    assert_eq!(ten.to_string(), "10 of Clubs");
    assert_eq!("Td".parse::<Card>().unwrap().face, Face::Ten);
    assert_eq!("qs".parse::<Card>().unwrap(), Card::new(Suit::Spades, Face::Queen));

    assert!("A".parse::<Card>().is_err());
    assert!("1h".parse::<Card>().is_err());
    assert!("Ax".parse::<Card>().is_err());
    assert!("A♥".parse::<Card>().is_err());
}

#[test]
fn face_points() {
    assert_eq!(Face::Two.points(), 2);
    assert_eq!(Face::Ten.points(), 10);
    assert_eq!(Face::Jack.points(), 10);
    assert_eq!(Face::King.points(), 10);
    assert_eq!(Face::Ace.points(), 11);
    assert!(Face::Ace.is_ace());
    assert!(!Face::King.is_ace());
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);

    let mut seen = std::collections::HashSet::new();
    for c in &deck.cards {
        assert!(seen.insert(*c), "duplicate {c}");
    }

    assert_eq!(deck.cards[0], Card::new(Suit::Hearts, Face::Two));
    assert_eq!(deck.cards[12], Card::new(Suit::Hearts, Face::Ace));
    assert_eq!(deck.cards[51], Card::new(Suit::Clubs, Face::Ace));
    assert_eq!(deck, Deck::default());
}

#[test]
fn moves_parse_from_key_or_name() {
    assert_eq!("r".parse::<Move>().unwrap(), Move::Rock);
    assert_eq!("k".parse::<Move>().unwrap(), Move::Spock);
    assert_eq!(" Lizard ".parse::<Move>().unwrap(), Move::Lizard);
    assert_eq!("PAPER".parse::<Move>().unwrap(), Move::Paper);
    assert!("x".parse::<Move>().is_err());
    assert!("rr".parse::<Move>().is_err());
    assert!("".parse::<Move>().is_err());

    for m in Move::ALL {
        assert_eq!(m.key().to_string().parse::<Move>().unwrap(), m);
        assert_eq!(m.to_string().parse::<Move>().unwrap(), m);
    }
}

#[test]
fn cells_are_one_through_nine() {
    assert!(Cell::new(0).is_none());
    assert!(Cell::new(10).is_none());
    assert_eq!(Cell::new(5), Some(Cell::CENTER));
    assert_eq!(Cell::all().count(), 9);
    assert_eq!("7".parse::<Cell>().unwrap().index(), 7);
    assert!("0".parse::<Cell>().is_err());
    assert!("abc".parse::<Cell>().is_err());
}

#[test]
fn markers() {
    assert_eq!(Marker::X.other(), Marker::O);
    assert_eq!(Marker::O.other(), Marker::X);
    assert_eq!("x".parse::<Marker>().unwrap(), Marker::X);
    assert_eq!("O".parse::<Marker>().unwrap(), Marker::O);
    assert!("0".parse::<Marker>().is_err());
}

#[test]
fn board_place_rejects_occupied_cells() {
    let mut b = Board::new();
    let c = Cell::new(3).unwrap();

    assert!(b.place(c, Marker::X));
    assert!(!b.place(c, Marker::O));
    assert_eq!(b.get(c), Some(Marker::X));
    assert_eq!(b.count(Marker::X), 1);
    assert_eq!(b.empty_cells().len(), 8);
    assert!(!b.empty_cells().contains(&c));

    b.clear();
    assert_eq!(b, Board::new());
}

#[test]
fn scoreboard_only_counts_wins() {
    let mut s = Scoreboard::new();
    s.record(RoundOutcome::HumanWins);
    s.record(RoundOutcome::Tie);
    s.record(RoundOutcome::ComputerWins);
    s.record(RoundOutcome::HumanWins);

    assert_eq!(s.of(Side::Human), 2);
    assert_eq!(s.of(Side::Computer), 1);
    assert_eq!(s.leader_at(2), Some(Side::Human));
    assert_eq!(s.leader_at(3), None);
}

#[test]
fn outcome_helpers() {
    assert_eq!(RoundOutcome::won_by(Side::Computer), RoundOutcome::ComputerWins);
    assert_eq!(RoundOutcome::HumanWins.winner(), Some(Side::Human));
    assert_eq!(RoundOutcome::Tie.winner(), None);
    assert_eq!(Side::Human.other(), Side::Computer);
}

#[test]
fn competitors_know_their_side() {
    let human = HumanPlayer::new("Alice");
    let bot = ComputerPlayer::new("Hal", ());

    assert_eq!(human.name(), "Alice");
    assert_eq!(human.side(), Side::Human);
    assert_eq!(bot.name(), "Hal");
    assert_eq!(bot.side(), Side::Computer);
}
