//! One learner session
//!
//! A `Session` exclusively owns the repository state, the display history and
//! the injected id/clock sources. Front-ends only ever call `submit` and read
//! the latest state and history back; commands are processed to completion,
//! one at a time, in submission order.

use crate::areas::repository::RepositoryState;
use crate::artifacts::command::parser::ParsedCommand;
use crate::artifacts::command::result::CommandResult;
use crate::artifacts::core::clock::{Clock, SystemClock};
use crate::artifacts::objects::object_id::{CommitIdGenerator, HashedIds};
use crate::commands::{self, Execution, HandlerContext};
use crate::config::SessionConfig;

/// What happened to a submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Empty or whitespace-only input: nothing recorded, nothing changed
    Ignored,
    /// `clear`: the history was replaced with an empty one
    Cleared,
    /// A result was appended to the history
    Recorded(CommandResult),
}

impl Submission {
    pub fn result(&self) -> Option<&CommandResult> {
        match self {
            Submission::Recorded(result) => Some(result),
            _ => None,
        }
    }
}

pub struct Session {
    config: SessionConfig,
    state: RepositoryState,
    history: Vec<CommandResult>,
    ids: Box<dyn CommitIdGenerator>,
    clock: Box<dyn Clock>,
}

impl Session {
    /// Session with hashed commit ids and the local wall clock
    pub fn new(config: SessionConfig) -> Self {
        Self::with_generators(
            config,
            Box::new(HashedIds::from_entropy()),
            Box::new(SystemClock),
        )
    }

    pub fn with_generators(
        config: SessionConfig,
        ids: Box<dyn CommitIdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let state = RepositoryState::new(config.working_files().to_vec());

        Session {
            config,
            state,
            history: Vec::new(),
            ids,
            clock,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &RepositoryState {
        &self.state
    }

    pub fn history(&self) -> &[CommandResult] {
        &self.history
    }

    /// Parse, dispatch and commit one raw command line
    pub fn submit(&mut self, raw: &str) -> Submission {
        let Some(command) = ParsedCommand::parse(raw) else {
            return Submission::Ignored;
        };

        let mut context = HandlerContext::new(&self.config, self.ids.as_mut(), self.clock.as_ref());
        match commands::execute(&self.state, &command, &mut context) {
            Execution::Clear => {
                log::debug!("clearing {} history entries", self.history.len());
                self.history = Vec::new();
                Submission::Cleared
            }
            Execution::Completed { result, next_state } => {
                if let Some(next_state) = next_state {
                    log::trace!("committing new repository state after '{}'", result.input);
                    self.state = next_state;
                }
                self.history.push(result.clone());
                Submission::Recorded(result)
            }
        }
    }

    /// Submit several lines in order, returning what each one produced
    pub fn replay<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> Vec<Submission> {
        lines.into_iter().map(|line| self.submit(line)).collect()
    }
}
