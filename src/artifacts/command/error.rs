//! In-band command errors
//!
//! Every variant renders (through `Display`) exactly the text a learner sees in
//! the terminal, and carries an explanation shown underneath it. These errors
//! never escape the dispatcher: they are folded into a `CommandResult` with an
//! `error` classification.

use thiserror::Error;

const NOT_A_REPOSITORY_HINT: &str =
    "You need to initialize a Git repository first with \"git init\".";

/// Error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The repository (or the state it needs) is missing
    Precondition,
    /// Malformed or missing arguments
    Validation,
    /// A referenced branch, file or remote does not exist
    NotFound,
    /// A branch or remote that must be unique already exists
    Conflict,
    /// The command or subcommand is not recognized
    UnknownCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("fatal: not a git repository (or any of the parent directories): .git")]
    NotARepository,
    #[error("{output}")]
    Precondition { output: String, explanation: String },
    #[error("{output}")]
    Usage { output: String, explanation: String },
    #[error("{output}")]
    NotFound { output: String, explanation: String },
    #[error("{output}")]
    Conflict { output: String, explanation: String },
    #[error("usage: git <command> [<args>]")]
    MissingSubcommand,
    #[error("git: '{0}' is not a git command. See 'help'.")]
    UnknownSubcommand(String),
    #[error("bash: {0}: command not found")]
    CommandNotFound(String),
}

impl CommandError {
    pub fn precondition(output: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self::Precondition {
            output: output.into(),
            explanation: explanation.into(),
        }
    }

    pub fn usage(output: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self::Usage {
            output: output.into(),
            explanation: explanation.into(),
        }
    }

    pub fn not_found(output: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self::NotFound {
            output: output.into(),
            explanation: explanation.into(),
        }
    }

    pub fn conflict(output: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self::Conflict {
            output: output.into(),
            explanation: explanation.into(),
        }
    }

    /// A branch creation clashing with an existing name
    pub fn branch_exists(name: &str) -> Self {
        Self::conflict(
            format!("fatal: A branch named '{}' already exists.", name),
            format!("Pick another name or switch to '{}' with \"git checkout\".", name),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::NotARepository | CommandError::Precondition { .. } => {
                ErrorKind::Precondition
            }
            CommandError::Usage { .. } | CommandError::MissingSubcommand => ErrorKind::Validation,
            CommandError::NotFound { .. } => ErrorKind::NotFound,
            CommandError::Conflict { .. } => ErrorKind::Conflict,
            CommandError::UnknownSubcommand(_) | CommandError::CommandNotFound(_) => {
                ErrorKind::UnknownCommand
            }
        }
    }

    pub fn explanation(&self) -> &str {
        match self {
            CommandError::NotARepository => NOT_A_REPOSITORY_HINT,
            CommandError::Precondition { explanation, .. }
            | CommandError::Usage { explanation, .. }
            | CommandError::NotFound { explanation, .. }
            | CommandError::Conflict { explanation, .. } => explanation.as_str(),
            CommandError::MissingSubcommand => {
                "Type a subcommand after \"git\". Try \"help\" to see available commands."
            }
            CommandError::UnknownSubcommand(_) => {
                "Unknown Git command. Try \"help\" to see available commands."
            }
            CommandError::CommandNotFound(_) => {
                "Command not recognized. This terminal supports Git commands."
            }
        }
    }
}
