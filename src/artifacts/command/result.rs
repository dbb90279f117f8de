use colored::{ColoredString, Colorize};
use derive_new::new;

/// Outcome tag used by front-ends to style a history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Success,
    Error,
    Info,
}

impl Classification {
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            Classification::Success => text.green(),
            Classification::Error => text.red(),
            Classification::Info => text.blue(),
        }
    }
}

impl From<&Classification> for &str {
    fn from(classification: &Classification) -> Self {
        match classification {
            Classification::Success => "success",
            Classification::Error => "error",
            Classification::Info => "info",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, "{}", label)
    }
}

/// One entry of the session history
///
/// Created only by the dispatcher and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommandResult {
    pub input: String,
    pub output: String,
    pub explanation: String,
    pub classification: Classification,
}

impl CommandResult {
    pub fn is_error(&self) -> bool {
        self.classification == Classification::Error
    }
}
