//! Stdin command mapping.
//!
//! One command per line so the client works in any terminal and with piped
//! input, without raw mode.

use runtime::Command;

/// Maps a trimmed, case-insensitive line to a command.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "t" | "toggle" => Some(Command::Toggle),
        "c" | "cycle" | "tab" => Some(Command::CycleTarget),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

pub const HELP: &str = "commands: t = toggle, c = cycle target, q = quit";
