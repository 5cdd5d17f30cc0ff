//! The Hi-Lo running count and the betting advice derived from it. Low cards leaving
//! the shoe favor the player, high cards favor the house; the count tracks shoe
//! depletion across consecutive rounds until the game is reset.

use crate::card::{Card, Rank, RANKS};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Display};

lazy_static! {
    /// Hi-Lo weight per rank: 2 through 6 count +1, 7 through 9 count 0, tens, court
    /// cards and aces count -1. An ace is always -1 no matter how it later scores.
    static ref HI_LO_WEIGHTS: HashMap<Rank, i32> = {
        let mut table = HashMap::new();
        for rank in RANKS {
            let weight = match rank.value() {
                2..=6 => 1,
                7..=9 => 0,
                _ => -1,
            };
            table.insert(rank, weight);
        }
        table
    };
}

/// Returns the Hi-Lo weight of `card`.
pub fn hi_lo_weight(card: &Card) -> i32 {
    HI_LO_WEIGHTS[&card.rank]
}

/// Discrete betting advice derived from the running count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advice {
    BetHigh,
    PlayNormally,
    BetLow,
}

impl Advice {
    /// Maps a running count to advice: positive counts favor the player, negative
    /// counts favor the house, zero is neutral.
    pub fn from_count(count: i32) -> Advice {
        if count > 0 {
            Advice::BetHigh
        } else if count < 0 {
            Advice::BetLow
        } else {
            Advice::PlayNormally
        }
    }
}

impl Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advice::BetHigh => write!(f, "Bet High: The deck is favorable for you."),
            Advice::BetLow => write!(f, "Bet Low: The deck is unfavorable."),
            Advice::PlayNormally => write!(f, "Play Normally: The deck is neutral."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Suit, SUITS};

    #[test]
    fn low_cards_count_up() {
        for rank in [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six] {
            assert_eq!(hi_lo_weight(&Card::new(rank, Suit::Hearts)), 1);
        }
    }

    #[test]
    fn middle_cards_count_nothing() {
        for rank in [Rank::Seven, Rank::Eight, Rank::Nine] {
            assert_eq!(hi_lo_weight(&Card::new(rank, Suit::Clubs)), 0);
        }
    }

    #[test]
    fn high_cards_count_down() {
        for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace] {
            assert_eq!(hi_lo_weight(&Card::new(rank, Suit::Spades)), -1);
        }
    }

    #[test]
    fn hi_lo_is_balanced_over_a_full_deck() {
        // A balanced count must come back to zero once a whole deck has been seen.
        let mut count = 0;
        for suit in SUITS {
            for rank in RANKS {
                count += hi_lo_weight(&Card::new(rank, suit));
            }
        }
        assert_eq!(count, 0);
    }

    #[test]
    fn advice_matches_the_count() {
        assert_eq!(Advice::from_count(10), Advice::BetHigh);
        assert_eq!(Advice::from_count(1), Advice::BetHigh);
        assert_eq!(Advice::from_count(0), Advice::PlayNormally);
        assert_eq!(Advice::from_count(-1), Advice::BetLow);
        assert_eq!(Advice::from_count(-10), Advice::BetLow);
    }

    #[test]
    fn advice_strings() {
        assert_eq!(
            Advice::BetHigh.to_string(),
            "Bet High: The deck is favorable for you."
        );
        assert_eq!(Advice::BetLow.to_string(), "Bet Low: The deck is unfavorable.");
        assert_eq!(
            Advice::PlayNormally.to_string(),
            "Play Normally: The deck is neutral."
        );
    }
}
