//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of each value
//! (default, configuration file or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "players": {
//!     "value": [],
//!     "source": "default"
//!   },
//!   "dealer": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "dealer": {
            "value": config.dealer,
            "source": sources.dealer,
        },
        "hand_counting": {
            "value": config.hand_counting,
            "source": sources.hand_counting,
        },
        "log_level": {
            "value": config.log_level,
            "source": sources.log_level,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
