//! # holdem-ai: decision providers
//!
//! Implementations of [`DecisionProvider`] for the table engine.
//!
//! ## Core Components
//!
//! - [`baseline`] - Deterministic rule bot
//! - [`scripted`] - Replays a fixed list of decisions, for tests and replays
//! - [`console`] - Text prompt player reading answers from any `BufRead`
//! - [`create_provider`] - Factory by provider kind
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_provider;
//! use holdem_engine::decision::DecisionProvider;
//!
//! let bot = create_provider("baseline", "Alice").unwrap();
//! assert_eq!(bot.name(), "Alice");
//! assert!(create_provider("oracle", "Bob").is_err());
//! ```

use holdem_engine::decision::DecisionProvider;
use thiserror::Error;

pub mod baseline;
pub mod console;
pub mod scripted;

pub use baseline::BaselineAI;
pub use console::ConsolePlayer;
pub use scripted::ScriptedPlayer;

/// Provider kinds accepted by [`create_provider`].
pub const PROVIDER_KINDS: [&str; 3] = ["baseline", "scripted", "console"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Unknown provider type: {0} (expected one of baseline, scripted, console)")]
    UnknownKind(String),
}

/// Builds a provider by kind name.
///
/// `"scripted"` starts with an empty script and therefore always folds;
/// `"console"` talks to the process's stdin and stdout.
pub fn create_provider(
    kind: &str,
    name: &str,
) -> Result<Box<dyn DecisionProvider>, ProviderError> {
    match kind.to_ascii_lowercase().as_str() {
        "baseline" => Ok(Box::new(BaselineAI::new(name))),
        "scripted" => Ok(Box::new(ScriptedPlayer::new(name, Vec::new()))),
        "console" => Ok(Box::new(ConsolePlayer::stdio(name))),
        _ => Err(ProviderError::UnknownKind(kind.to_string())),
    }
}
