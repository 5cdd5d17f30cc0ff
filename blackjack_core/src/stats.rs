use crate::game::RoundOutcome;
use serde::Serialize;
use std::fmt::{self, Display};

/// Simple struct for recording how the session's revealed rounds came out. The tally
/// survives `Game::reset`, it describes the whole session rather than one shoe.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct SessionStats {
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub player_busts: u32,
    pub house_busts: u32,
}

impl SessionStats {
    /// Associated function for creating an empty tally.
    pub fn new() -> SessionStats {
        SessionStats::default()
    }

    /// Records the result of one revealed round. Busts count toward the win/loss
    /// totals as well as their own column.
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerBust => {
                self.player_busts += 1;
                self.losses += 1;
            }
            RoundOutcome::HouseBust => {
                self.house_busts += 1;
                self.wins += 1;
            }
            RoundOutcome::PlayerWin => self.wins += 1,
            RoundOutcome::HouseWin => self.losses += 1,
            RoundOutcome::Push => self.pushes += 1,
        }
    }

    /// Total number of rounds revealed so far.
    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.pushes
    }
}

impl Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 80;
        const TEXT_WIDTH: usize = "rounds ending in a player bust".len() + 20;
        const NUM_WIDTH: usize = WIDTH - TEXT_WIDTH;
        let body = format!(
            "{:-^WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {}",
            "session",
            "rounds won",
            self.wins,
            "rounds lost",
            self.losses,
            "rounds pushed",
            self.pushes,
            "rounds ending in a player bust",
            self.player_busts,
            "rounds ending in a house bust",
            self.house_busts,
            "total rounds",
            self.rounds(),
            "-".repeat(WIDTH)
        );
        write!(f, "{}", body)
    }
}
