//! Chat line parsing.
//!
//! Lines starting with `/` are commands, anything else is speech. Unknown
//! commands and malformed arguments parse to [`ChatCommand::Unknown`] and are
//! ignored by the engine.

use crate::geometry::Cell;

pub const HELP_TEXT: &str = "Commands: /save, /load, /bank, /stats, /quest, /eat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Help,
    Save,
    Load,
    Bank,
    Stats,
    Quest,
    Eat,
    Teleport(Cell),
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    Empty,
    Say(String),
    Command(ChatCommand),
}

pub fn parse_chat(line: &str) -> ChatInput {
    let line = line.trim();
    if line.is_empty() {
        return ChatInput::Empty;
    }
    match line.strip_prefix('/') {
        Some(rest) => ChatInput::Command(parse_command(rest)),
        None => ChatInput::Say(line.to_string()),
    }
}

fn parse_command(rest: &str) -> ChatCommand {
    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    match name {
        "help" => ChatCommand::Help,
        "save" => ChatCommand::Save,
        "load" => ChatCommand::Load,
        "bank" => ChatCommand::Bank,
        "stats" => ChatCommand::Stats,
        "quest" => ChatCommand::Quest,
        "eat" => ChatCommand::Eat,
        "teleport" => {
            let x = parts.next().and_then(|v| v.parse::<i32>().ok());
            let y = parts.next().and_then(|v| v.parse::<i32>().ok());
            match (x, y) {
                (Some(x), Some(y)) => ChatCommand::Teleport(Cell::new(x, y)),
                _ => ChatCommand::Unknown(rest.to_string()),
            }
        }
        _ => ChatCommand::Unknown(rest.to_string()),
    }
}
