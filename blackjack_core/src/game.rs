//! Module that focuses on a single table of blackjack: one named player against the
//! house, a shoe the table deals from, and the running Hi-Lo count used for betting
//! advice. The engine owns all of the state; presentation is the caller's job and
//! every operation hands back a value instead of printing.

use crate::card::Card;
use crate::counting::{hi_lo_weight, Advice};
use crate::deck::Shoe;
use crate::error::GameError;
use crate::stats::SessionStats;
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Display};

/// Cards needed up front for a fresh deal, two to the player and two to the house.
const CARDS_PER_DEAL: usize = 4;

/// Message confirming a completed reset, handed to the presentation layer.
pub const RESET_MESSAGE: &str = "Game reset. Card count cleared.";

/// The result of comparing finalized hands at reveal time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerBust,
    HouseBust,
    PlayerWin,
    HouseWin,
    Push,
}

impl Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::PlayerBust => write!(f, "You bust! House wins."),
            RoundOutcome::HouseBust => write!(f, "House busts! You win."),
            RoundOutcome::PlayerWin => write!(f, "You win!"),
            RoundOutcome::HouseWin => write!(f, "House wins."),
            RoundOutcome::Push => write!(f, "It's a tie."),
        }
    }
}

/// Computes the best blackjack total for a hand. Aces start at 11 and are downgraded
/// to 1 one at a time while the total sits above 21; the returned total may still
/// exceed 21, which is a bust.
pub fn hand_value(hand: &[Card]) -> u32 {
    let mut total = 0;
    let mut aces = 0;
    for card in hand {
        let value = card.value();
        if value == 11 {
            aces += 1;
        }
        total += value;
    }
    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }
    total
}

/// The game engine. Owns the shoe, the table of active hands, the house hand and the
/// running count. Single threaded by design, one writer at a time.
pub struct Game {
    shoe: Shoe,
    table: Table,
    house_hand: Vec<Card>,
    card_count: i32,
    stats: SessionStats,
}

impl Game {
    /// Associated function for creating a new `Game` with a freshly shuffled shoe of
    /// `num_decks` decks. Fails with `InvalidConfiguration` if `num_decks` is less
    /// than 1.
    pub fn new(num_decks: u32) -> Result<Game, GameError> {
        let shoe = Shoe::new(num_decks)?;
        Ok(Game {
            shoe,
            table: Table::new(),
            house_hand: Vec::new(),
            card_count: 0,
            stats: SessionStats::new(),
        })
    }

    /// Deals a fresh round: two cards into a new table entry for `player_id` and two
    /// into the house hand, replacing any prior entry or house hand. Fails with
    /// `DepletedShoe` when fewer than four cards remain; the caller must `reset`
    /// before dealing again, there is no auto reshuffle mid shoe so the count keeps
    /// its meaning for the whole shoe.
    pub fn deal(&mut self, player_id: &str) -> Result<(), GameError> {
        if self.shoe.remaining() < CARDS_PER_DEAL {
            return Err(GameError::DepletedShoe {
                needed: CARDS_PER_DEAL,
                remaining: self.shoe.remaining(),
            });
        }
        let player_hand = vec![self.draw()?, self.draw()?];
        self.house_hand = vec![self.draw()?, self.draw()?];
        self.table
            .active_hands
            .insert(player_id.to_string(), player_hand);
        Ok(())
    }

    /// Draws exactly one more card for `player_id`. Fails with `NoActiveHand` if the
    /// player was never dealt in; the check runs before the draw so a bad id never
    /// consumes or counts a card. No bust guard on purpose, the caller stops hitting
    /// once `hand_value` shows a bust.
    pub fn hit(&mut self, player_id: &str) -> Result<(), GameError> {
        if !self.table.active_hands.contains_key(player_id) {
            return Err(GameError::NoActiveHand(player_id.to_string()));
        }
        let card = self.draw()?;
        if let Some(hand) = self.table.active_hands.get_mut(player_id) {
            hand.push(card);
        }
        Ok(())
    }

    /// Scores the player's hand against the house and resolves the round with the
    /// ordered policy: a player bust loses outright, then a house bust wins, then the
    /// higher total wins, equal totals push. The only state touched is the session
    /// tally; the hands stay on the table until the next deal or reset.
    pub fn reveal(&mut self, player_id: &str) -> Result<RoundOutcome, GameError> {
        let player_hand = self
            .table
            .active_hands
            .get(player_id)
            .ok_or_else(|| GameError::NoActiveHand(player_id.to_string()))?;
        let player_total = hand_value(player_hand);
        let house_total = hand_value(&self.house_hand);

        let outcome = if player_total > 21 {
            RoundOutcome::PlayerBust
        } else if house_total > 21 {
            RoundOutcome::HouseBust
        } else if player_total > house_total {
            RoundOutcome::PlayerWin
        } else if house_total > player_total {
            RoundOutcome::HouseWin
        } else {
            RoundOutcome::Push
        };
        self.stats.record(outcome);
        Ok(outcome)
    }

    /// Clears every hand at the table along with the house hand, zeroes the running
    /// count and refills the shoe. Returns the confirmation message for the
    /// presentation layer. Safe to call repeatedly.
    pub fn reset(&mut self) -> &'static str {
        self.table.clear();
        self.house_hand.clear();
        self.card_count = 0;
        self.shoe.replenish();
        RESET_MESSAGE
    }

    /// The hands currently active at the table, keyed by player name.
    pub fn active_hands(&self) -> &HashMap<String, Vec<Card>> {
        &self.table.active_hands
    }

    /// The house's current hand.
    pub fn house_hand(&self) -> &[Card] {
        &self.house_hand
    }

    /// The running Hi-Lo count over every card dealt since the last reset.
    pub fn card_count(&self) -> i32 {
        self.card_count
    }

    /// Betting advice derived from the current running count.
    pub fn advice(&self) -> Advice {
        Advice::from_count(self.card_count)
    }

    /// Cards left in the shoe, so the caller can reset before the shoe runs dry.
    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// The session tally of revealed rounds.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Pulls the next card from the shoe and feeds it through the running count.
    /// Every card that leaves the shoe passes through here exactly once, so no card
    /// is ever counted twice.
    fn draw(&mut self) -> Result<Card, GameError> {
        match self.shoe.draw() {
            Some(card) => {
                self.update_count(&card);
                Ok(card)
            }
            None => Err(GameError::DepletedShoe {
                needed: 1,
                remaining: 0,
            }),
        }
    }

    /// Adds the Hi-Lo weight of `card` to the running count.
    fn update_count(&mut self, card: &Card) {
        self.card_count += hi_lo_weight(card);
    }
}
