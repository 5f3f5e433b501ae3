//! Command-line argument types.

use clap::{Parser, Subcommand};
use pokertrack_engine::stats::HandCounting;

#[derive(Parser, Debug)]
#[command(
    name = "pokertrack",
    version,
    about = "Pokertrack: live table turn and player statistics tracker"
)]
pub struct PokertrackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Track a live table; actions are read line by line from stdin
    Play {
        /// Player names in seat order, comma separated (blank entries leave a seat free)
        #[arg(long, value_delimiter = ',')]
        players: Option<Vec<String>>,
        /// Seat holding the dealer button (0-based)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..10))]
        dealer: Option<u8>,
        /// Start the game immediately instead of waiting for `start`
        #[arg(long)]
        start: bool,
        /// How hands played are counted for VPIP and PFR
        #[arg(long, value_parser = parse_hand_counting)]
        hand_counting: Option<HandCounting>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

fn parse_hand_counting(raw: &str) -> Result<HandCounting, String> {
    raw.parse()
}
