//! Line input for the interactive session.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Surrounding whitespace is trimmed. Returns `None` on EOF or read errors.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use pokertrack_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  fold \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("fold"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
