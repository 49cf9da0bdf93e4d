//! Datagram command parsing.

use crate::world::Direction;

/// A decoded inbound command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `new` - join, or re-send the current room for a known client.
    New,
    /// `reset` - reshuffle the world and re-place the player.
    Reset,
    /// A single-letter movement command.
    Move(Direction),
}

/// Parses one datagram's text into a command.
///
/// Matches the wire behavior of the original server: a `new` or `reset`
/// prefix wins, otherwise the first character is tried as a direction
/// letter. Returns `None` for anything unrecognized.
///
/// # Examples
///
/// ```
/// use warren::{Command, Direction};
/// use warren::server::parse_command;
///
/// assert_eq!(parse_command("new"), Some(Command::New));
/// assert_eq!(parse_command("N"), Some(Command::Move(Direction::North)));
/// assert_eq!(parse_command("jump"), None);
/// ```
pub fn parse_command(text: &str) -> Option<Command> {
    let text = text.trim();
    if text.starts_with("new") {
        return Some(Command::New);
    }
    if text.starts_with("reset") {
        return Some(Command::Reset);
    }
    // Anything else is judged by its first character, as the original
    // server did.
    let first = text.chars().next()?;
    Direction::from_char(first).map(Command::Move)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_join_and_reset() {
        assert_eq!(parse_command("new"), Some(Command::New));
        assert_eq!(parse_command("new game"), Some(Command::New));
        assert_eq!(parse_command("reset"), Some(Command::Reset));
        assert_eq!(parse_command("  reset  "), Some(Command::Reset));
    }

    #[test]
    fn parses_all_direction_letters_in_both_cases() {
        for (c, d) in [
            ('n', Direction::North),
            ('s', Direction::South),
            ('e', Direction::East),
            ('w', Direction::West),
        ] {
            assert_eq!(parse_command(&c.to_string()), Some(Command::Move(d)));
            assert_eq!(
                parse_command(&c.to_ascii_uppercase().to_string()),
                Some(Command::Move(d))
            );
        }
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("x"), None);
        assert_eq!(parse_command("42"), None);
    }

    #[test]
    fn longer_text_is_judged_by_its_first_character() {
        assert_eq!(parse_command("north"), Some(Command::Move(Direction::North)));
        assert_eq!(parse_command("east wing"), Some(Command::Move(Direction::East)));
    }
}
