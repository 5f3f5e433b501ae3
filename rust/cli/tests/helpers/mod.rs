//! # Test helpers
//!
//! - `cli_runner`: `CliRunner` drives `pokertrack_cli::run_with_input` in
//!   process with scripted stdin and captures stdout, stderr and the exit code.
//!   Configuration environment variables are pinned for the duration of a run.
//!
//! ```rust,ignore
//! use crate::helpers::cli_runner::CliRunner;
//!
//! let res = CliRunner::new().run_with_input(&["play", "--players", "A,B"], "q\n");
//! assert_eq!(res.exit_code, 0);
//! ```
pub mod cli_runner;
