//! Input parsing for the interactive session.
//!
//! Each line typed during `pokertrack play` is turned into a
//! [`SessionCommand`]. Parsing never touches the tracker; range and
//! occupancy checks stay with the engine so that its error messages reach
//! the user unchanged.

use pokertrack_engine::seat::Action;
use pokertrack_engine::turn::Direction;

/// A single request typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Name (or free, with an empty name) a seat
    Name { seat: usize, name: String },
    Dealer(usize),
    Start,
    Act(Action),
    /// Force the next hand
    NextHand,
    /// Reset one seat's statistics; the focused seat when omitted
    Reset(Option<usize>),
    /// Browse seats without acting
    Step(Direction),
    Status,
    Stats,
    Json,
    History,
    Help,
}

/// Result type for parsing one line of session input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Command(SessionCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

fn parse_seat(raw: &str, usage: &str) -> Result<usize, String> {
    if raw.is_empty() {
        return Err(format!("Missing seat number (e.g., '{}')", usage));
    }
    raw.parse::<usize>()
        .map_err(|_| format!("Invalid seat number '{}'", raw))
}

/// Splits off the first whitespace-delimited token; any run of whitespace
/// separates it from the rest.
fn split_token(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim_start()),
        None => (input, ""),
    }
}

/// Parse user input string into a session command.
///
/// Accepts the following input formats (case-insensitive keywords):
/// - "name 3 Alice" / "name 3" (frees seat 3)
/// - "dealer 3", "start"
/// - "check"/"x", "bet"/"raise"/"b"/"r", "call"/"c", "fold"/"f"
/// - "next", "reset [seat]", "left"/"<", "right"/">"
/// - "status", "stats", "json", "history", "help"/"?"
/// - "q" or "quit"
///
/// # Example
///
/// ```rust
/// # use pokertrack_cli::validation::{parse_session_command, ParseResult, SessionCommand};
/// use pokertrack_engine::seat::Action;
///
/// assert_eq!(
///     parse_session_command("raise"),
///     ParseResult::Command(SessionCommand::Act(Action::BetRaise))
/// );
/// assert_eq!(
///     parse_session_command("name 2 Carol Ann"),
///     ParseResult::Command(SessionCommand::Name { seat: 2, name: "Carol Ann".into() })
/// );
/// assert_eq!(parse_session_command("q"), ParseResult::Quit);
/// ```
pub fn parse_session_command(input: &str) -> ParseResult {
    let (keyword, rest) = split_token(input.trim());
    if keyword.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    let keyword = keyword.to_lowercase();

    let command = match keyword.as_str() {
        "q" | "quit" | "exit" => return ParseResult::Quit,
        "check" | "x" => SessionCommand::Act(Action::Check),
        "bet" | "raise" | "b" | "r" => SessionCommand::Act(Action::BetRaise),
        "call" | "c" => SessionCommand::Act(Action::Call),
        "fold" | "f" => SessionCommand::Act(Action::Fold),
        "name" => {
            let (seat, name) = split_token(rest);
            match parse_seat(seat, "name 0 Alice") {
                Ok(seat) => SessionCommand::Name {
                    seat,
                    name: name.trim().to_string(),
                },
                Err(msg) => return ParseResult::Invalid(msg),
            }
        }
        "dealer" => match parse_seat(split_token(rest).0, "dealer 0") {
            Ok(seat) => SessionCommand::Dealer(seat),
            Err(msg) => return ParseResult::Invalid(msg),
        },
        "reset" if rest.is_empty() => SessionCommand::Reset(None),
        "reset" => match parse_seat(split_token(rest).0, "reset 0") {
            Ok(seat) => SessionCommand::Reset(Some(seat)),
            Err(msg) => return ParseResult::Invalid(msg),
        },
        "start" | "play" => SessionCommand::Start,
        "next" | "n" => SessionCommand::NextHand,
        "left" | "<" => SessionCommand::Step(Direction::Left),
        "right" | ">" => SessionCommand::Step(Direction::Right),
        "status" | "s" => SessionCommand::Status,
        "stats" => SessionCommand::Stats,
        "json" => SessionCommand::Json,
        "history" | "h" => SessionCommand::History,
        "help" | "?" => SessionCommand::Help,
        other => {
            return ParseResult::Invalid(format!(
                "Unrecognized command '{}'. Type 'help' for the list of commands",
                other
            ));
        }
    };
    ParseResult::Command(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_aliases() {
        assert_eq!(
            parse_session_command("X"),
            ParseResult::Command(SessionCommand::Act(Action::Check))
        );
        assert_eq!(
            parse_session_command("bet"),
            ParseResult::Command(SessionCommand::Act(Action::BetRaise))
        );
        assert_eq!(
            parse_session_command("f"),
            ParseResult::Command(SessionCommand::Act(Action::Fold))
        );
    }

    #[test]
    fn name_without_player_frees_the_seat() {
        assert_eq!(
            parse_session_command("name 4"),
            ParseResult::Command(SessionCommand::Name {
                seat: 4,
                name: String::new()
            })
        );
    }

    #[test]
    fn repeated_spaces_separate_arguments() {
        assert_eq!(
            parse_session_command("name  0   Ann Lee "),
            ParseResult::Command(SessionCommand::Name {
                seat: 0,
                name: "Ann Lee".into()
            })
        );
        assert_eq!(
            parse_session_command("dealer   3"),
            ParseResult::Command(SessionCommand::Dealer(3))
        );
        assert_eq!(
            parse_session_command("reset\t 5"),
            ParseResult::Command(SessionCommand::Reset(Some(5)))
        );
        assert_eq!(
            parse_session_command("name \t "),
            ParseResult::Invalid("Missing seat number (e.g., 'name 0 Alice')".into())
        );
    }

    #[test]
    fn seat_number_must_be_numeric() {
        match parse_session_command("dealer two") {
            ParseResult::Invalid(msg) => assert!(msg.contains("Invalid seat")),
            other => panic!("expected Invalid, got {:?}", other),
        }
        match parse_session_command("dealer") {
            ParseResult::Invalid(msg) => assert!(msg.contains("Missing seat")),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn reset_defaults_to_focused_seat() {
        assert_eq!(
            parse_session_command("reset"),
            ParseResult::Command(SessionCommand::Reset(None))
        );
        assert_eq!(
            parse_session_command("reset 7"),
            ParseResult::Command(SessionCommand::Reset(Some(7)))
        );
    }

    #[test]
    fn empty_and_unknown_input_is_invalid() {
        assert_eq!(
            parse_session_command("   "),
            ParseResult::Invalid("Empty input".to_string())
        );
        assert!(matches!(
            parse_session_command("shove"),
            ParseResult::Invalid(_)
        ));
    }

    #[test]
    fn arrows_step_focus() {
        assert_eq!(
            parse_session_command("<"),
            ParseResult::Command(SessionCommand::Step(Direction::Left))
        );
        assert_eq!(
            parse_session_command("right"),
            ParseResult::Command(SessionCommand::Step(Direction::Right))
        );
    }
}
