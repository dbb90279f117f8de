//! Command dispatch
//!
//! Commands are resolved through a static, ordered dispatch table keyed by the
//! normalized command identifier: two tokens for tool commands (`"git add"`),
//! one token for terminal built-ins (`"help"`, `"clear"`). Each repository
//! command is bound to a pure handler `(state, invocation) -> outcome`.
//!
//! - `porcelain`: One handler per simulated Git command
//! - `builtin`: Terminal built-ins that bypass the repository pipeline
//! - `reference`: Command reference catalog for front-ends

pub mod builtin;
pub mod porcelain;
pub mod reference;

use crate::areas::repository::RepositoryState;
use crate::artifacts::command::error::CommandError;
use crate::artifacts::command::outcome::Outcome;
use crate::artifacts::command::parser::ParsedCommand;
use crate::artifacts::command::result::{Classification, CommandResult};
use crate::artifacts::core::clock::Clock;
use crate::artifacts::objects::object_id::{CommitId, CommitIdGenerator};
use crate::config::SessionConfig;

/// Name of the simulated tool; unmatched lines starting with it are unknown subcommands
pub const TOOL_NAME: &str = "git";

/// Arguments a handler receives
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'c> {
    /// Trimmed input line, for handlers that capture literal values
    pub raw: &'c str,
    /// Tokens after the command key, case preserved
    pub args: &'c [String],
}

impl<'c> Invocation<'c> {
    pub fn new(raw: &'c str, args: &'c [String]) -> Self {
        Self { raw, args }
    }

    pub fn arg(&self, position: usize) -> Option<&'c str> {
        self.args.get(position).map(String::as_str)
    }

    /// Whether the argument at `position` is the flag `flag`, ignoring case
    pub fn flag_at(&self, position: usize, flag: &str) -> bool {
        self.arg(position)
            .is_some_and(|arg| arg.eq_ignore_ascii_case(flag))
    }
}

/// Collaborators a handler may need besides the repository state
pub struct HandlerContext<'s> {
    pub config: &'s SessionConfig,
    ids: &'s mut dyn CommitIdGenerator,
    clock: &'s dyn Clock,
}

impl<'s> HandlerContext<'s> {
    pub fn new(
        config: &'s SessionConfig,
        ids: &'s mut dyn CommitIdGenerator,
        clock: &'s dyn Clock,
    ) -> Self {
        Self { config, ids, clock }
    }

    /// Draw ids until one is not used by any commit of `state`
    pub fn fresh_commit_id(&mut self, state: &RepositoryState) -> CommitId {
        loop {
            let id = self.ids.next_id();
            if !state.has_commit_id(&id) {
                return id;
            }
            log::warn!("commit id {} already in use, drawing another", id);
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock
    }
}

pub type Handler = fn(
    &RepositoryState,
    &Invocation<'_>,
    &mut HandlerContext<'_>,
) -> Result<Outcome, CommandError>;

/// How a dispatch table entry is executed
#[derive(Clone, Copy)]
pub enum Route {
    /// Runs a handler against the repository state
    Repository {
        handler: Handler,
        requires_repository: bool,
    },
    Help,
    Clear,
}

/// One row of the dispatch table
#[derive(Clone, Copy)]
pub struct CommandEntry {
    pub route: Route,
    pub usage: &'static str,
    pub summary: &'static str,
}

impl CommandEntry {
    /// Number of tokens the key of this entry is made of
    pub fn key_len(key: &str) -> usize {
        key.split(' ').count()
    }
}

/// Dispatch table; its order is the order `help` lists commands in
pub static COMMANDS: phf::OrderedMap<&'static str, CommandEntry> = phf::phf_ordered_map! {
    "git init" => CommandEntry {
        route: Route::Repository { handler: porcelain::init::init, requires_repository: false },
        usage: "git init",
        summary: "Initialize repository",
    },
    "git status" => CommandEntry {
        route: Route::Repository { handler: porcelain::status::status, requires_repository: true },
        usage: "git status",
        summary: "Check repository status",
    },
    "git add" => CommandEntry {
        route: Route::Repository { handler: porcelain::add::add, requires_repository: true },
        usage: "git add <file>",
        summary: "Stage files",
    },
    "git commit" => CommandEntry {
        route: Route::Repository { handler: porcelain::commit::commit, requires_repository: true },
        usage: "git commit -m \"message\"",
        summary: "Commit changes",
    },
    "git log" => CommandEntry {
        route: Route::Repository { handler: porcelain::log::log, requires_repository: true },
        usage: "git log",
        summary: "View commit history",
    },
    "git branch" => CommandEntry {
        route: Route::Repository { handler: porcelain::branch::branch, requires_repository: true },
        usage: "git branch [name]",
        summary: "List or create branches",
    },
    "git checkout" => CommandEntry {
        route: Route::Repository { handler: porcelain::checkout::checkout, requires_repository: true },
        usage: "git checkout [-b] <branch>",
        summary: "Switch branches",
    },
    "git merge" => CommandEntry {
        route: Route::Repository { handler: porcelain::merge::merge, requires_repository: true },
        usage: "git merge <branch>",
        summary: "Merge branches",
    },
    "git diff" => CommandEntry {
        route: Route::Repository { handler: porcelain::diff::diff, requires_repository: true },
        usage: "git diff",
        summary: "Show changes",
    },
    "git remote" => CommandEntry {
        route: Route::Repository { handler: porcelain::remote::remote, requires_repository: true },
        usage: "git remote",
        summary: "Manage remotes",
    },
    "git push" => CommandEntry {
        route: Route::Repository { handler: porcelain::push::push, requires_repository: true },
        usage: "git push",
        summary: "Upload changes",
    },
    "git config" => CommandEntry {
        route: Route::Repository { handler: porcelain::config::config, requires_repository: true },
        usage: "git config",
        summary: "Configure Git",
    },
    "clear" => CommandEntry {
        route: Route::Clear,
        usage: "clear",
        summary: "Clear terminal",
    },
    "help" => CommandEntry {
        route: Route::Help,
        usage: "help",
        summary: "Show this help",
    },
};

/// Result of running one parsed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Execution {
    /// The history must be emptied; no entry is recorded
    Clear,
    Completed {
        result: CommandResult,
        next_state: Option<RepositoryState>,
    },
}

/// Find the table entry for a parsed line, preferring the two-token key
pub fn resolve(command: &ParsedCommand) -> Option<(&'static str, &'static CommandEntry)> {
    let long_key = command.long_key();
    let long = long_key
        .as_deref()
        .and_then(|key| COMMANDS.get_entry(key));

    long.or_else(|| COMMANDS.get_entry(command.short_key().as_str()))
        .map(|(key, entry)| (*key, entry))
}

/// Dispatch a parsed line against `state`
///
/// Never fails: unknown commands and handler errors come back as results with
/// an `error` classification, and the state is left untouched.
pub fn execute(
    state: &RepositoryState,
    command: &ParsedCommand,
    context: &mut HandlerContext<'_>,
) -> Execution {
    let outcome = match resolve(command) {
        Some((key, entry)) => {
            log::debug!("dispatching '{}' to '{}'", command.raw(), key);
            let invocation = Invocation::new(command.raw(), command.args(CommandEntry::key_len(key)));
            match entry.route {
                Route::Clear => return Execution::Clear,
                Route::Help => Ok(builtin::help()),
                Route::Repository {
                    handler,
                    requires_repository,
                } => {
                    if requires_repository && !state.is_initialized() {
                        Err(CommandError::NotARepository)
                    } else {
                        handler(state, &invocation, context)
                    }
                }
            }
        }
        None => Err(unrecognized(command)),
    };

    let (result, next_state) = match outcome {
        Ok(outcome) => (
            CommandResult::new(
                command.raw().to_string(),
                outcome.output,
                outcome.explanation,
                outcome.classification,
            ),
            outcome.next_state,
        ),
        Err(error) => {
            log::debug!("'{}' failed: {:?}", command.raw(), error.kind());
            (
                CommandResult::new(
                    command.raw().to_string(),
                    error.to_string(),
                    error.explanation().to_string(),
                    Classification::Error,
                ),
                None,
            )
        }
    };

    Execution::Completed { result, next_state }
}

fn unrecognized(command: &ParsedCommand) -> CommandError {
    if command.program() != TOOL_NAME {
        return CommandError::CommandNotFound(command.tokens()[0].clone());
    }

    match command.subcommand() {
        Some(subcommand) => CommandError::UnknownSubcommand(subcommand),
        None => CommandError::MissingSubcommand,
    }
}
