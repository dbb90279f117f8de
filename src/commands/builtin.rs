//! Terminal built-ins
//!
//! `help` and `clear` are not Git commands: they never look at the repository
//! state. `clear` is handled entirely by the dispatcher (it empties the
//! history); `help` is rendered from the dispatch table so it always lists
//! exactly what can be dispatched.

use crate::artifacts::command::outcome::Outcome;
use crate::commands::COMMANDS;

const HELP_TITLE: &str = "Available Git commands:";
const BULLET: &str = "•";

pub fn help() -> Outcome {
    Outcome::info(help_text(), "Shows available commands and their basic usage.")
}

pub fn help_text() -> String {
    let mut lines = vec![HELP_TITLE.to_string()];
    lines.extend(
        COMMANDS
            .values()
            .map(|entry| format!("{} {} - {}", BULLET, entry.usage, entry.summary)),
    );

    lines.join("\n")
}
