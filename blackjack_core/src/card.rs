use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The four suits of a standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

/// The thirteen ranks of a standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// All suits, in the order a fresh deck is built.
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// All ranks, in the order a fresh deck is built.
pub const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Rank {
    /// Returns the blackjack value of the rank. Court cards are worth 10 and an ace is
    /// worth 11 here; downgrading an ace to 1 is the scorer's job, not the card's.
    pub fn value(&self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        };
        write!(f, "{}", label)
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        write!(f, "{}", label)
    }
}

/// A single playing card, an immutable rank and suit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Associated function for creating a new `Card`.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the blackjack value of the card.
    pub fn value(&self) -> u32 {
        self.rank.value()
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_values() {
        assert_eq!(Card::new(Rank::Two, Suit::Hearts).value(), 2);
        assert_eq!(Card::new(Rank::Nine, Suit::Clubs).value(), 9);
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).value(), 10);
        assert_eq!(Card::new(Rank::Jack, Suit::Diamonds).value(), 10);
        assert_eq!(Card::new(Rank::Queen, Suit::Hearts).value(), 10);
        assert_eq!(Card::new(Rank::King, Suit::Clubs).value(), 10);
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).value(), 11);
    }

    #[test]
    fn card_display() {
        assert_eq!(
            Card::new(Rank::Ten, Suit::Hearts).to_string(),
            "10 of Hearts"
        );
        assert_eq!(
            Card::new(Rank::King, Suit::Hearts).to_string(),
            "King of Hearts"
        );
        assert_eq!(
            Card::new(Rank::Ace, Suit::Diamonds).to_string(),
            "Ace of Diamonds"
        );
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).to_string(), "2 of Clubs");
    }
}
