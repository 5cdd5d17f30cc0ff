use blackjack_core::prelude::*;
use clap::Parser;

/// Plays scripted rounds at the table and prints each outcome together with the
/// running count and the betting advice it implies.
#[derive(Parser)]
#[command(name = "blackjack_advisor")]
struct Cli {
    /// Number of 52 card decks in the shoe
    #[arg(long, default_value_t = 6)]
    decks: u32,
    /// Number of rounds to play
    #[arg(long, default_value_t = 20)]
    rounds: u32,
    /// Name of the seated player
    #[arg(long, default_value = "Player")]
    player: String,
    /// Total the player stands on
    #[arg(long, default_value_t = 17)]
    stand_on: u32,
    /// Print the session summary as JSON instead of the formatted block
    #[arg(long)]
    json: bool,
}

fn format_hand(hand: &[Card]) -> String {
    hand.iter()
        .map(|card| card.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

fn main() {
    let cli = Cli::parse();

    let mut game = match Game::new(cli.decks) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let mut round = 0;
    while round < cli.rounds {
        match game.deal(&cli.player) {
            Ok(()) => {}
            Err(GameError::DepletedShoe { .. }) => {
                // The shoe ran low; the count only means something for a whole shoe,
                // so reset and start a fresh one.
                println!("{}", game.reset());
                continue;
            }
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        round += 1;

        // Draw until the player reaches their standing total or the shoe runs dry.
        loop {
            if hand_value(&game.active_hands()[cli.player.as_str()]) >= cli.stand_on {
                break;
            }
            match game.hit(&cli.player) {
                Ok(()) => {}
                Err(GameError::DepletedShoe { .. }) => break,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }

        let outcome = match game.reveal(&cli.player) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        };

        let player_hand = &game.active_hands()[cli.player.as_str()];
        println!("round #{round}");
        println!(
            "  {}: {} ({})",
            cli.player,
            format_hand(player_hand),
            hand_value(player_hand)
        );
        println!(
            "  house: {} ({})",
            format_hand(game.house_hand()),
            hand_value(game.house_hand())
        );
        println!("  {outcome}");
        println!("  running count: {:+}", game.card_count());
        println!("  {}", game.advice());
        println!();
    }

    if cli.json {
        match serde_json::to_string_pretty(game.stats()) {
            Ok(summary) => println!("{summary}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", game.stats());
    }
}
