//! # holdem CLI library
//!
//! Command-line front end for the table engine. The binary is a thin wrapper
//! around [`run`], which parses arguments, dispatches to a command handler and
//! returns the process exit code.
//!
//! ```no_run
//! use std::io;
//! let args = ["holdem", "play", "--players", "6", "--seed", "42"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Subcommands
//!
//! - `play`: run a tournament of baseline bots, optionally with a human seat
//! - `eval`: evaluate hole cards against a board
//! - `cfg`: show the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, HoldemCli};
use commands::{handle_cfg_command, handle_eval_command, handle_play_command};

pub use error::CliError;

/// Parses `args` and runs the selected command.
///
/// Returns `0` on success and `2` on any error; help and version output go to
/// `out` with exit code `0`.
///
/// ```
/// use std::io;
/// let args = ["holdem", "eval", "--hole", "Ah Kd", "--board", "Kh Kc 4s"];
/// let mut out = Vec::new();
/// let code = holdem_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Three of a Kind"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match &cli.cmd {
        Commands::Play(args) => handle_play_command(args, out),
        Commands::Eval { hole, board } => handle_eval_command(hole, board, out),
        Commands::Cfg => handle_cfg_command(out),
    };
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
