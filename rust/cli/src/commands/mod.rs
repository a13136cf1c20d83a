//! Command handlers.
//!
//! Each handler takes its parsed arguments plus the output stream and returns
//! `Result<(), CliError>`; printing the error is left to [`crate::run`].

mod cfg;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
