//! # holdem-engine: No-Limit Texas Hold'em table engine
//!
//! Plays a multi-player tournament hand by hand: blinds, dealing, four betting
//! streets, side-pot settlement, then elimination and blind rotation. Decisions
//! come from pluggable [`decision::DecisionProvider`]s; everything else is
//! deterministic given the table seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Fisher-Yates shuffled or preset decks
//! - [`hand`] - 7-card evaluation and tiered ranking of players
//! - [`player`] - Player state, actions, and stack management
//! - [`round`] - Per-hand pot, bet levels, board and log
//! - [`rules`] - Offered actions and validation against the live state
//! - [`betting`] - The per-street betting state machine
//! - [`pot`] - Side pots and payouts
//! - [`engine`] - Hand orchestration and tournament loop
//! - [`game`] - Blinds and seat rotation
//! - [`decision`] - The decision provider capability
//! - [`logger`] - Actions, streets and HandRecord serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate, Category};
//!
//! let board = parse_cards("Kh Kc 4s 2d 3c").unwrap();
//! let hole = parse_cards("Kd Qs").unwrap();
//!
//! let rank = evaluate(&[hole[0], hole[1]], &board);
//! assert_eq!(rank.category, Category::ThreeOfAKind);
//! assert_eq!(rank.describe(), "Three of a Kind (K; kickers Q, 4)");
//! ```
//!
//! ## Side Pots
//!
//! ```rust
//! use holdem_engine::pot::side_pots_from;
//!
//! let pots = side_pots_from(&[(0, 100), (1, 200), (2, 300), (3, 400)]);
//! let amounts: Vec<u32> = pots.iter().map(|p| p.amount).collect();
//! assert_eq!(amounts, [400, 300, 200, 100]);
//! ```

pub mod betting;
pub mod cards;
pub mod decision;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod round;
pub mod rules;
