use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::Player;

/// Forced bets posted by seat 0 (small) and seat 1 (big) every hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Blinds {
    pub fn new(small: u32, big: u32) -> Self {
        Self { small, big }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.small == 0 || self.small > self.big {
            return Err(GameError::InvalidBlinds {
                small: self.small,
                big: self.big,
            });
        }
        Ok(())
    }
}

impl Default for Blinds {
    fn default() -> Self {
        Self { small: 5, big: 10 }
    }
}

/// Moves the small blind to the next seat and drops busted players.
///
/// The seat list is rotated left by one and then filtered to players with
/// chips, so relative order is preserved and seat 0 is the next small blind.
pub fn rotate_and_eliminate(players: &mut Vec<Player>) -> Vec<Player> {
    if players.is_empty() {
        return Vec::new();
    }
    players.rotate_left(1);
    let (kept, busted): (Vec<Player>, Vec<Player>) =
        players.drain(..).partition(|p| p.stack() > 0);
    *players = kept;
    busted
}
