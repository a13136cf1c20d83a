use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandRank;
use crate::player::PlayerId;

/// Represents a betting street in Texas Hold'em poker.
/// Defines the four stages of a poker hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    /// Community cards revealed before this street's betting opens.
    pub fn cards_to_deal(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "Pre-flop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };
        f.write_str(s)
    }
}

/// What a player did, as recorded in the hand log. Blinds are forced and never
/// come from a decision provider.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ActionKind {
    SmallBlind(u32),
    BigBlind(u32),
    Fold,
    Check,
    Call,
    Bet(u32),
    Raise(u32),
    AllIn,
}

/// Records a single applied action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub player_id: PlayerId,
    pub player_name: String,
    pub street: Street,
    pub kind: ActionKind,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.player_name;
        match &self.kind {
            ActionKind::SmallBlind(n) => write!(f, "Player {name} posts small blind of {n}"),
            ActionKind::BigBlind(n) => write!(f, "Player {name} posts big blind of {n}"),
            ActionKind::Fold => write!(f, "Player {name} folds."),
            ActionKind::Check => write!(f, "Player {name} checks."),
            ActionKind::Call => write!(f, "Player {name} calls."),
            ActionKind::Bet(n) => write!(f, "Player {name} bets {n}."),
            ActionKind::Raise(n) => write!(f, "Player {name} raises by {n}."),
            ActionKind::AllIn => write!(f, "Player {name} goes all in."),
        }
    }
}

/// A contesting player's hand as shown at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    pub player_id: PlayerId,
    pub hole: [Card; 2],
    pub hand: HandRank,
    pub description: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub player_id: PlayerId,
    pub amount: u32,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatResult {
    pub player_id: PlayerId,
    pub name: String,
    pub chips: u32,
}

/// Complete in-memory record of one hand: actions, board, showdown and the
/// resulting stacks.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Seed of the table RNG the deck was drawn from
    pub seed: Option<u64>,
    pub actions: Vec<Action>,
    pub board: Vec<Card>,
    pub pot: u32,
    /// Empty when the hand ended without a showdown
    #[serde(default)]
    pub showdown: Vec<ShowdownEntry>,
    pub payouts: Vec<Payout>,
    pub final_chips: Vec<SeatResult>,
    /// Players removed from the table after this hand
    #[serde(default)]
    pub eliminated: Vec<PlayerId>,
    #[serde(default)]
    pub log: Vec<String>,
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl HandRecord {
    pub fn payout_for(&self, player_id: PlayerId) -> u32 {
        self.payouts
            .iter()
            .filter(|p| p.player_id == player_id)
            .map(|p| p.amount)
            .sum()
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Issues sequential hand ids for one table session.
#[derive(Debug, Clone)]
pub struct HandIds {
    date: String,
    seq: u32,
}

impl HandIds {
    pub fn today() -> Self {
        Self {
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        }
    }

    pub fn with_date(date: &str) -> Self {
        Self {
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }
}

pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
