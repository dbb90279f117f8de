use crate::areas::repository::RepositoryState;
use crate::artifacts::command::error::CommandError;
use crate::artifacts::command::outcome::Outcome;
use crate::commands::{HandlerContext, Invocation};

const CREATE_FLAG: &str = "-b";

/// `checkout <branch>` switches, `checkout -b <branch>` creates and switches
///
/// Only the current branch changes: the simulator keeps one shared working
/// tree, so staged files and commits are not touched.
pub fn checkout(
    state: &RepositoryState,
    invocation: &Invocation<'_>,
    _context: &mut HandlerContext<'_>,
) -> Result<Outcome, CommandError> {
    if invocation.arg(0) == Some(CREATE_FLAG) {
        return match invocation.arg(1) {
            Some(name) => create_and_switch(state, name),
            None => Err(CommandError::usage(
                "error: switch `b' requires a value",
                "Give the new branch a name, e.g. \"git checkout -b feature\".",
            )),
        };
    }

    match invocation.arg(0) {
        Some(flag) if flag.starts_with('-') => Err(CommandError::usage(
            format!("error: unknown switch '{}'\nusage: git checkout [-b] <branch>", flag),
            "Use \"git checkout <branch>\" to switch or \"git checkout -b <branch>\" to create one.",
        )),
        Some(name) => switch(state, name),
        None => Err(CommandError::usage(
            "fatal: you must specify path(s) to restore",
            "You need to specify a branch name to checkout.",
        )),
    }
}

fn create_and_switch(state: &RepositoryState, name: &str) -> Result<Outcome, CommandError> {
    if state.has_branch(name) {
        return Err(CommandError::branch_exists(name));
    }

    Ok(Outcome::success(
        format!("Switched to a new branch '{}'", name),
        format!("Creates and switches to a new branch named '{}'.", name),
    )
    .with_state(state.clone().with_branch(name).switched_to(name)))
}

fn switch(state: &RepositoryState, name: &str) -> Result<Outcome, CommandError> {
    if !state.has_branch(name) {
        return Err(CommandError::not_found(
            format!(
                "error: pathspec '{}' did not match any file(s) known to git",
                name
            ),
            "The specified branch does not exist.",
        ));
    }

    if state.is_current_branch(name) {
        return Ok(Outcome::info(
            format!("Already on '{}'", name),
            format!("You are already on the branch '{}'.", name),
        ));
    }

    Ok(Outcome::success(
        format!("Switched to branch '{}'", name),
        format!("Switches to the existing branch '{}'.", name),
    )
    .with_state(state.clone().switched_to(name)))
}
