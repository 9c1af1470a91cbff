//! Slash-command value object and parser

/// Commands that take no argument.
const BARE_COMMANDS: &[&str] = &["undo", "read", "done", "help", "pause", "resume", "skip"];

/// A parsed slash command.
///
/// Only `save` carries an argument (the target path). Anything after the
/// slash that isn't a recognized name is coerced to `Help` so slash input
/// is never mistaken for content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: CommandName,
    pub arg: Option<String>,
}

/// Recognized command names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    Undo,
    Read,
    Done,
    Help,
    Save,
    Pause,
    Resume,
    Skip,
}

impl CommandName {
    /// The name as typed after the slash.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::Undo => "undo",
            CommandName::Read => "read",
            CommandName::Done => "done",
            CommandName::Help => "help",
            CommandName::Save => "save",
            CommandName::Pause => "pause",
            CommandName::Resume => "resume",
            CommandName::Skip => "skip",
        }
    }

    fn from_bare(name: &str) -> Option<Self> {
        match name {
            "undo" => Some(CommandName::Undo),
            "read" => Some(CommandName::Read),
            "done" => Some(CommandName::Done),
            "help" => Some(CommandName::Help),
            "pause" => Some(CommandName::Pause),
            "resume" => Some(CommandName::Resume),
            "skip" => Some(CommandName::Skip),
            _ => None,
        }
    }
}

impl Command {
    fn bare(name: CommandName) -> Self {
        Self { name, arg: None }
    }
}

/// Parse a slash command from an input line.
///
/// Returns `None` for anything that doesn't start with `/`. Lines that do
/// start with `/` always produce a command: unrecognized names become
/// `Help` so the caller can surface usage guidance.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or("");
    let rest = parts.next().map(str::trim).filter(|s| !s.is_empty());

    let name = head[1..].to_lowercase();

    if let Some(bare) = CommandName::from_bare(&name) {
        debug_assert!(BARE_COMMANDS.contains(&bare.as_str()));
        return Some(Command::bare(bare));
    }

    if name == "save" {
        return Some(Command {
            name: CommandName::Save,
            arg: rest.map(str::to_string),
        });
    }

    // Unknown slash-word: still a command, coerced to help
    Some(Command::bare(CommandName::Help))
}
