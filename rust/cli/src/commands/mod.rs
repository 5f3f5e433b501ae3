//! Command handler modules for the pokertrack CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed in
//! - Errors propagated via the `CliError` enum

mod cfg;
mod play;

pub use cfg::handle_cfg_command;
pub use play::{PlayOptions, handle_play_command};
