//! `holdem eval`: classify two hole cards plus a board.

use std::collections::HashSet;
use std::io::Write;

use holdem_engine::cards::{Card, parse_cards};
use holdem_engine::hand::evaluate;

use crate::error::CliError;
use crate::formatters::format_board;

pub fn handle_eval_command(hole: &str, board: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let hole_cards = parse_cards(hole)?;
    let hole: [Card; 2] = hole_cards.as_slice().try_into().map_err(|_| {
        CliError::InvalidInput(format!("expected 2 hole cards, got {}", hole_cards.len()))
    })?;
    let board = parse_cards(board)?;
    if !(3..=5).contains(&board.len()) {
        return Err(CliError::InvalidInput(format!(
            "expected 3 to 5 board cards, got {}",
            board.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = hole.iter().chain(&board).find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("card {dup} appears twice")));
    }

    let hand = evaluate(&hole, &board);
    writeln!(out, "Hole: {}", format_board(&hole))?;
    writeln!(out, "Board: {}", format_board(&board))?;
    writeln!(out, "Category: {}", hand.category)?;
    writeln!(out, "Hand: {}", hand.describe())?;
    Ok(())
}
