//! Severity-tagged console reporting.
//!
//! One line per message. Info and debug go to stdout; warnings and errors
//! go to stderr. Tags are colored when the stream is a terminal.

use std::fmt::Display;

use console::style;

pub fn info(message: impl Display) {
    println!("{} {}", style("[INFO]").green(), message);
}

pub fn debug(message: impl Display) {
    println!("{} {}", style("[DEBUG]").blue(), message);
}

pub fn warn(message: impl Display) {
    eprintln!("{} {}", style("[WARN]").yellow(), message);
}

pub fn error(message: impl Display) {
    eprintln!("{} {}", style("[ERROR]").red(), message);
}
