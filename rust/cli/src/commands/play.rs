//! # Play Command
//!
//! Seats the configured number of players, runs hands until one player holds
//! every chip (or the hand limit is reached) and prints what happened.
//!
//! - **Bots only**: every seat is a [`holdem_ai::BaselineAI`]
//! - **`--human`**: seat 0 answers text prompts on stdin
//!
//! With `--json` each hand record is printed as one JSON line and nothing
//! else goes to stdout.

use std::io::Write;

use holdem_ai::create_provider;
use holdem_engine::decision::DecisionProvider;
use holdem_engine::engine::Engine;
use holdem_engine::game::Blinds;
use holdem_engine::player::Player;
use tracing::info;

use crate::cli::PlayArgs;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::{format_hand_summary, format_standings};

/// Name of the seat taken by `--human`.
pub const HUMAN_NAME: &str = "You";

pub fn handle_play_command(args: &PlayArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources(&args.overrides())?;
    run_tournament(&resolved.config, args.human, args.json, out)
}

fn seats(cfg: &Config, human: bool) -> Result<Vec<(Player, Box<dyn DecisionProvider>)>, CliError> {
    (0..cfg.players)
        .map(|id| {
            let (kind, name) = if human && id == 0 {
                ("console", HUMAN_NAME.to_string())
            } else {
                ("baseline", format!("Bot{}", id + 1))
            };
            let provider = create_provider(kind, &name)?;
            Ok((Player::new(id, name, cfg.starting_stack), provider))
        })
        .collect()
}

fn run_tournament(
    cfg: &Config,
    human: bool,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let blinds = Blinds::new(cfg.small_blind, cfg.big_blind);
    let mut engine = Engine::new(seats(cfg, human)?, blinds, seed)?;
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;

    info!(seed, players = cfg.players, ?blinds, "tournament starting");
    if !json {
        writeln!(
            out,
            "play: players={} blinds={}/{} stack={} seed={}",
            cfg.players, cfg.small_blind, cfg.big_blind, cfg.starting_stack, seed
        )?;
    }

    let mut played = 0u32;
    while !engine.is_finished() && cfg.max_hands.map_or(true, |max| played < max) {
        let record = runtime.block_on(engine.play_round())?;
        played += 1;
        if json {
            let line = record.to_json_line().map_err(std::io::Error::other)?;
            writeln!(out, "{}", line)?;
        } else {
            write!(out, "{}", format_hand_summary(&record))?;
        }
    }

    if !json {
        writeln!(out, "Standings after {} hands:", played)?;
        write!(out, "{}", format_standings(&engine.standings()))?;
    }
    Ok(())
}
