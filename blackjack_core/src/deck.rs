use crate::card::{Card, RANKS, SUITS};
use crate::error::GameError;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// The shoe: one or more standard 52 card decks combined and shuffled at construction.
/// Cards only ever leave the shoe, it shrinks until `replenish` rebuilds it.
pub struct Shoe {
    cards: Vec<Card>,
    num_decks: u32,
}

impl Shoe {
    /// Associated function for creating a new shuffled `Shoe` from `num_decks` decks.
    /// Returns an `InvalidConfiguration` error if `num_decks` is less than 1.
    pub fn new(num_decks: u32) -> Result<Shoe, GameError> {
        if num_decks < 1 {
            return Err(GameError::InvalidConfiguration(format!(
                "a shoe requires at least one deck, got {}",
                num_decks
            )));
        }
        let mut cards = Shoe::fresh_cards(num_decks);
        cards.shuffle(&mut thread_rng());
        Ok(Shoe { cards, num_decks })
    }

    /// Helper that builds `num_decks` copies of all 52 rank and suit combinations.
    fn fresh_cards(num_decks: u32) -> Vec<Card> {
        let mut cards = Vec::with_capacity((num_decks as usize) * 52);
        for _ in 0..num_decks {
            for suit in SUITS {
                for rank in RANKS {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        cards
    }

    /// Deals the next card from the shoe, `None` once the shoe is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards left in the shoe.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Rebuilds the shoe to its full complement and reshuffles.
    pub fn replenish(&mut self) {
        self.cards = Shoe::fresh_cards(self.num_decks);
        self.cards.shuffle(&mut thread_rng());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shoe_has_fifty_two_cards_per_deck() {
        let shoe = Shoe::new(1).unwrap();
        assert_eq!(shoe.remaining(), 52);

        let shoe = Shoe::new(6).unwrap();
        assert_eq!(shoe.remaining(), 312);
    }

    #[test]
    fn zero_decks_is_an_invalid_configuration() {
        match Shoe::new(0) {
            Err(GameError::InvalidConfiguration(_)) => {}
            other => panic!("expected InvalidConfiguration, got {:?}", other.err()),
        }
    }

    #[test]
    fn drawing_shrinks_the_shoe() {
        let mut shoe = Shoe::new(1).unwrap();
        assert!(shoe.draw().is_some());
        assert_eq!(shoe.remaining(), 51);
    }

    #[test]
    fn shoe_depletes_after_every_card_is_drawn() {
        let mut shoe = Shoe::new(1).unwrap();
        for _ in 0..52 {
            assert!(shoe.draw().is_some());
        }
        assert!(shoe.draw().is_none());
        assert_eq!(shoe.remaining(), 0);
    }

    #[test]
    fn replenish_restores_the_full_complement() {
        let mut shoe = Shoe::new(2).unwrap();
        for _ in 0..30 {
            shoe.draw();
        }
        shoe.replenish();
        assert_eq!(shoe.remaining(), 104);
    }
}
