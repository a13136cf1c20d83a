use thiserror::Error;

use crate::player::PlayerId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid action: {reason}")]
    InvalidAction { reason: String },
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Player {player_id} already holds two cards")]
    HoleCardsFull { player_id: PlayerId },
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("No active players at showdown")]
    NoActivePlayers,
    #[error("No active player is eligible for a pot of {pot}")]
    NoEligibleWinner { pot: u32 },
    #[error("At least two players with chips are required (got {count})")]
    NotEnoughPlayers { count: usize },
    #[error("Player {player_id} sits down without chips")]
    EmptyStack { player_id: PlayerId },
    #[error("Table holds more than {} chips in total", u32::MAX)]
    ChipOverflow,
    #[error("Invalid blinds: small {small}, big {big}")]
    InvalidBlinds { small: u32, big: u32 },
    #[error("No decision provider registered for player {player_id}")]
    MissingProvider { player_id: PlayerId },
    #[error("Player id {player_id} is seated twice")]
    DuplicatePlayer { player_id: PlayerId },
}

impl GameError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GameError::InvalidAction {
            reason: reason.into(),
        }
    }
}
