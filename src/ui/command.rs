//! Command parsing for the TUI command deck
//!
//! Parses what the user typed after opening the deck with `:` or `@`:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `@path.txt` → Load a plain-text file
//! - `@@` → Load from clipboard
//! - `:web <url>` or `:w <url>` → Scrape a web page
//! - `:text <words>` or `:t <words>` → Read typed text
//! - `:size <value>` / `:speed <value>` → Set a field as typed

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    LoadUrl(String),
    LoadText(String),
    SetSize(String),
    SetSpeed(String),
    Unknown(String),
}

/// Key and command reference shown by `?` and `:help`
pub const HELP_LINES: &[&str] = &[
    "Space         pause / resume",
    "← h [         previous context page",
    "→ l ]         next context page",
    "+ / -         adjust speed",
    "q             quit",
    "",
    "@path.txt     load a text file",
    "@@            load the clipboard",
    ":web <url>    read the paragraphs of a web page",
    ":text <words> read typed text",
    ":size <n>     display size",
    ":speed <n>    words per minute",
    ":q            quit",
];

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    // Check for empty input first
    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (cmd, ""),
        };

        match (name, arg) {
            ("q" | "quit", "") => Command::Quit,
            ("h" | "help", "") => Command::Help,
            ("w" | "web", url) if !url.is_empty() => Command::LoadUrl(url.to_string()),
            ("t" | "text", text) if !text.is_empty() => Command::LoadText(text.to_string()),
            ("size", value) if !value.is_empty() => Command::SetSize(value.to_string()),
            ("speed", value) if !value.is_empty() => Command::SetSpeed(value.to_string()),
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::LoadUrl(url) => AppEvent::LoadUrl(url),
        Command::LoadText(text) => AppEvent::LoadText(text),
        Command::SetSize(value) => AppEvent::SetSize(value),
        Command::SetSpeed(value) => AppEvent::SetSpeed(value),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
