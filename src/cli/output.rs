//! Shell messages that sit outside the rendered view: help text, usage
//! warnings and suggestions.

use std::fmt;
use std::io::{self, Write};

use colored::Colorize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Section,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Stdout,
    Stderr,
}

#[derive(Clone, Copy, Debug)]
pub struct OutputPreferences {
    pub color: bool,
    pub target: Target,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color: false,
            target: Target::Stdout,
        }
    }
}

pub fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Info => text,
        MessageKind::Warning => format!("WARNING: {text}"),
        MessageKind::Section => format!("=== {} ===", text.trim()),
    };
    if !prefs.color {
        return formatted;
    }
    match kind {
        MessageKind::Info => formatted,
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) {
    let formatted = apply_style(kind, message, prefs);
    // A closed pipe is not worth aborting the shell over.
    let _ = match prefs.target {
        Target::Stdout => writeln!(io::stdout(), "{formatted}"),
        Target::Stderr => writeln!(io::stderr(), "{formatted}"),
    };
}
