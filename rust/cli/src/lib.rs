//! # Pokertrack CLI Library
//!
//! Command-line front end for the pokertrack engine: seat a table, feed in
//! each player's action as it happens and read back turn order and player
//! statistics.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand. [`run_with_input`] does the same with
//! session input taken from any reader.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::{self, Cursor};
//! let args = vec!["pokertrack", "play", "--players", "Ann,Bob,Cat", "--dealer", "0", "--start"];
//! let mut input = Cursor::new("call\ncall\ncheck\nstats\n");
//! let code = pokertrack_cli::run_with_input(args, &mut input, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Track a live table interactively
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, PokertrackCli};
use commands::{PlayOptions, handle_cfg_command, handle_play_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// Session input for `play` is read from the process's stdin.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], reading session input from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokertrackCli::try_parse_from(&argv) {
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
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: pokertrack <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    let _ = writeln!(err, "\nFor full help, run: pokertrack --help");
                    exit_code::ERROR
                }
            };
        }
    };

    match cli.cmd {
        // cfg reports its own failures
        Commands::Cfg => match handle_cfg_command(out, err) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        },
        Commands::Play {
            players,
            dealer,
            start,
            hand_counting,
        } => {
            let resolved = match config::load_with_sources() {
                Ok(r) => r,
                Err(e) => {
                    let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
                    return exit_code::ERROR;
                }
            };
            let cfg = resolved.config;
            logging::init_logging(&cfg.log_level);

            let opts = PlayOptions {
                players: players.unwrap_or(cfg.players),
                dealer: dealer.map(usize::from).or(cfg.dealer),
                start,
                counting: hand_counting.unwrap_or(cfg.hand_counting),
            };
            match handle_play_command(&opts, out, err, input) {
                Ok(()) => exit_code::SUCCESS,
                Err(CliError::Io(e)) => {
                    let _ = ui::write_error(err, &e.to_string());
                    exit_code::ERROR
                }
                // setup rejections are already reported
                Err(_) => exit_code::ERROR,
            }
        }
    }
}
