use crate::card::Card;
use std::collections::HashMap;

/// A thin holder for the hands currently in play, keyed by player name. A player has an
/// entry iff they hold an active hand this round. The table enforces no game rules, the
/// engine does.
#[derive(Debug, Default)]
pub struct Table {
    pub active_hands: HashMap<String, Vec<Card>>,
}

impl Table {
    /// Associated function for creating a new empty `Table`.
    pub fn new() -> Table {
        Table {
            active_hands: HashMap::new(),
        }
    }

    /// Removes every hand from the table.
    pub fn clear(&mut self) {
        self.active_hands.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn clear_empties_the_table() {
        let mut table = Table::new();
        table.active_hands.insert(
            "Alice".to_string(),
            vec![Card::new(Rank::Ten, Suit::Hearts)],
        );
        assert_eq!(table.active_hands.len(), 1);
        table.clear();
        assert!(table.active_hands.is_empty());
    }
}
