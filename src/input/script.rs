//! Line-oriented event scripts.
//!
//! A script is a recorded or hand-written stream of input events, one per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! tool rectangle
//! color #ff8800
//! down 10 10
//! move 25 20
//! up 40 30
//! clear
//! cancel
//! ```

use super::events::{InputEvent, PointerEvent};
use super::tool::{Tool, ToolParseError};
use crate::draw::{Color, ColorParseError};
use thiserror::Error;

/// A script line that could not be turned into an event.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    WrongArity {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid coordinate '{value}'")]
    InvalidCoordinate { line: usize, value: String },

    #[error("line {line}: {source}")]
    Tool {
        line: usize,
        #[source]
        source: ToolParseError,
    },

    #[error("line {line}: {source}")]
    Color {
        line: usize,
        #[source]
        source: ColorParseError,
    },
}

/// Parses a whole script, stopping at the first bad line.
pub fn parse_script(source: &str) -> Result<Vec<InputEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        if let Some(event) = parse_line(raw, index + 1)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Parses one line. `line` is the 1-based line number used in errors.
///
/// Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<InputEvent>, ScriptError> {
    // A '#' that starts a color value is not a comment
    let comment_start = raw
        .match_indices('#')
        .map(|(pos, _)| pos)
        .find(|&pos| !is_color_hash(raw, pos));
    let content = match comment_start {
        Some(pos) => &raw[..pos],
        None => raw,
    };
    let mut parts = content.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();
    let command_lower = command.to_lowercase();

    let event = match command_lower.as_str() {
        "down" | "move" | "up" => {
            let [x, y] = args.as_slice() else {
                return Err(ScriptError::WrongArity {
                    line,
                    command: command.to_string(),
                    expected: "two coordinates",
                });
            };
            let x = parse_coordinate(x, line)?;
            let y = parse_coordinate(y, line)?;
            let pointer = match command_lower.as_str() {
                "down" => PointerEvent::Down { x, y },
                "move" => PointerEvent::Move { x, y },
                _ => PointerEvent::Up { x, y },
            };
            InputEvent::Pointer(pointer)
        }
        "tool" => {
            let value = single_arg(&args, command, line, "a tool name")?;
            let tool = value
                .parse::<Tool>()
                .map_err(|source| ScriptError::Tool { line, source })?;
            InputEvent::SetTool(tool)
        }
        "color" => {
            let value = single_arg(&args, command, line, "a color name or hex value")?;
            let color = value
                .parse::<Color>()
                .map_err(|source| ScriptError::Color { line, source })?;
            InputEvent::SetColor(color)
        }
        "clear" | "cancel" => {
            if !args.is_empty() {
                return Err(ScriptError::WrongArity {
                    line,
                    command: command.to_string(),
                    expected: "no arguments",
                });
            }
            if command_lower == "clear" {
                InputEvent::Clear
            } else {
                InputEvent::Cancel
            }
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_string(),
            });
        }
    };

    Ok(Some(event))
}

/// A `#` directly after the `color` command and whitespace belongs to the value.
fn is_color_hash(raw: &str, pos: usize) -> bool {
    let before = raw[..pos].trim_end();
    before.len() < raw[..pos].len() && before.trim_start().eq_ignore_ascii_case("color")
}

fn single_arg<'a>(
    args: &[&'a str],
    command: &str,
    line: usize,
    expected: &'static str,
) -> Result<&'a str, ScriptError> {
    match args {
        [value] => Ok(*value),
        _ => Err(ScriptError::WrongArity {
            line,
            command: command.to_string(),
            expected,
        }),
    }
}

fn parse_coordinate(value: &str, line: usize) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScriptError::InvalidCoordinate {
            line,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn parses_every_command() {
        let script = "\
# a rectangle
tool rect
color #ff0000
down 10 10
move 12.5 11
up 40 30

clear
cancel
";
        let events = parse_script(script).unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::SetTool(Tool::Rectangle),
                InputEvent::SetColor(RED),
                InputEvent::Pointer(PointerEvent::Down { x: 10.0, y: 10.0 }),
                InputEvent::Pointer(PointerEvent::Move { x: 12.5, y: 11.0 }),
                InputEvent::Pointer(PointerEvent::Up { x: 40.0, y: 30.0 }),
                InputEvent::Clear,
                InputEvent::Cancel,
            ]
        );
    }

    #[test]
    fn trailing_comments_are_stripped() {
        let event = parse_line("down 1 2   # press", 1).unwrap();
        assert_eq!(
            event,
            Some(InputEvent::Pointer(PointerEvent::Down { x: 1.0, y: 2.0 }))
        );
        assert_eq!(parse_line("   # only a comment", 1).unwrap(), None);
    }

    #[test]
    fn color_hash_is_not_a_comment() {
        let event = parse_line("color #00ff00", 3).unwrap();
        assert_eq!(event, Some(InputEvent::SetColor(crate::draw::GREEN)));

        let event = parse_line("color #0000ff  # blue", 4).unwrap();
        assert_eq!(event, Some(InputEvent::SetColor(crate::draw::BLUE)));
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = parse_script("down 1 1\nup 2\n").unwrap_err();
        assert!(matches!(err, ScriptError::WrongArity { line: 2, .. }));

        let err = parse_script("tool hexagon").unwrap_err();
        assert!(matches!(err, ScriptError::Tool { line: 1, .. }));
        assert!(err.to_string().starts_with("line 1: unknown tool"));

        let err = parse_script("\n\nmove x 3").unwrap_err();
        assert_eq!(
            err,
            ScriptError::InvalidCoordinate {
                line: 3,
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn rejects_unknown_commands_and_bad_colors() {
        assert!(matches!(
            parse_line("jump 1 1", 7),
            Err(ScriptError::UnknownCommand { line: 7, .. })
        ));
        assert!(matches!(
            parse_line("color #12", 2),
            Err(ScriptError::Color { line: 2, .. })
        ));
        assert!(matches!(
            parse_line("move inf 0", 1),
            Err(ScriptError::InvalidCoordinate { .. })
        ));
    }
}
