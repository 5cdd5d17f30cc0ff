//! A simplified casino blackjack table for a single player against the house, with a
//! running Hi-Lo card count mapped to discrete betting advice. The crate holds the
//! card and shoe model, the table of active hands and the game engine; presentation
//! and input loops live with the caller.

pub mod card;
pub mod counting;
pub mod deck;
pub mod error;
pub mod game;
pub mod stats;
pub mod table;

pub mod prelude {
    pub use crate::card::{Card, Rank, Suit, RANKS, SUITS};
    pub use crate::counting::{hi_lo_weight, Advice};
    pub use crate::deck::Shoe;
    pub use crate::error::GameError;
    pub use crate::game::{hand_value, Game, RoundOutcome, RESET_MESSAGE};
    pub use crate::stats::SessionStats;
    pub use crate::table::Table;
}

pub use prelude::*;
