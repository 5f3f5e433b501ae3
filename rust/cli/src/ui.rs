//! UI helper functions for terminal output formatting.
//!
//! Consistent prefixes for messages that are not part of a command's normal
//! output.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}
