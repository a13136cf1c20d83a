//! Command-line definitions.

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

#[derive(Debug, Parser)]
#[command(
    name = "holdem",
    version,
    about = "No-Limit Texas Hold'em tournament simulator"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a tournament of baseline bots until one player holds every chip
    Play(PlayArgs),
    /// Evaluate two hole cards against a board
    Eval {
        /// Two hole cards, e.g. "Ah Kd"
        #[arg(long)]
        hole: String,
        /// Three to five board cards, e.g. "Kh Kc 4s 2d 3c"
        #[arg(long)]
        board: String,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PlayArgs {
    /// Seats at the table (2-10)
    #[arg(long)]
    pub players: Option<usize>,
    /// Stop after this many hands even if several players still have chips
    #[arg(long)]
    pub hands: Option<u32>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub stack: Option<u32>,
    #[arg(long)]
    pub small_blind: Option<u32>,
    #[arg(long)]
    pub big_blind: Option<u32>,
    /// Take seat 0 yourself and answer prompts on stdin
    #[arg(long)]
    pub human: bool,
    /// Print each hand record as one JSON line instead of a summary
    #[arg(long)]
    pub json: bool,
}

impl PlayArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            players: self.players,
            starting_stack: self.stack,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            seed: self.seed,
            max_hands: self.hands,
        }
    }
}
