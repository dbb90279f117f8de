use crate::areas::repository::RepositoryState;
use crate::artifacts::command::result::Classification;

/// What a handler returns on success
///
/// `next_state` is `None` for read-only commands; otherwise it replaces the
/// session state wholesale once the dispatcher commits the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub explanation: String,
    pub classification: Classification,
    pub next_state: Option<RepositoryState>,
}

impl Outcome {
    pub fn success(output: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self::classified(Classification::Success, output, explanation)
    }

    pub fn info(output: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self::classified(Classification::Info, output, explanation)
    }

    fn classified(
        classification: Classification,
        output: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            output: output.into(),
            explanation: explanation.into(),
            classification,
            next_state: None,
        }
    }

    pub fn with_state(mut self, state: RepositoryState) -> Self {
        self.next_state = Some(state);
        self
    }
}
