use crate::areas::repository::RepositoryState;
use crate::artifacts::command::error::CommandError;
use crate::artifacts::command::outcome::Outcome;
use crate::commands::{HandlerContext, Invocation};

const CURRENT_MARKER: &str = "* ";
const OTHER_MARKER: &str = "  ";

/// `branch` lists, `branch <name>` creates, `branch -d|-D <name>` deletes
pub fn branch(
    state: &RepositoryState,
    invocation: &Invocation<'_>,
    _context: &mut HandlerContext<'_>,
) -> Result<Outcome, CommandError> {
    match invocation.arg(0) {
        None => Ok(list_branches(state)),
        Some(flag) if flag == "-d" || flag == "-D" || flag == "--delete" => {
            delete_branch(state, invocation.arg(1))
        }
        Some(flag) if flag.starts_with('-') => Err(CommandError::usage(
            format!("error: unknown switch '{}'\nusage: git branch [-d] [<name>]", flag),
            "Use \"git branch <name>\" to create a branch or \"git branch -d <name>\" to delete one.",
        )),
        Some(name) => create_branch(state, name),
    }
}

fn list_branches(state: &RepositoryState) -> Outcome {
    let output = state
        .branches()
        .iter()
        .map(|branch| {
            let marker = if state.is_current_branch(branch) {
                CURRENT_MARKER
            } else {
                OTHER_MARKER
            };
            format!("{}{}", marker, branch)
        })
        .collect::<Vec<_>>()
        .join("\n");

    Outcome::info(
        output,
        "Lists all branches. The current branch is marked with an asterisk (*).",
    )
}

fn create_branch(state: &RepositoryState, name: &str) -> Result<Outcome, CommandError> {
    if state.has_branch(name) {
        return Err(CommandError::branch_exists(name));
    }

    Ok(
        Outcome::success("", format!("Creates a new branch named '{}'.", name))
            .with_state(state.clone().with_branch(name)),
    )
}

fn delete_branch(state: &RepositoryState, name: Option<&str>) -> Result<Outcome, CommandError> {
    let Some(name) = name else {
        return Err(CommandError::usage(
            "fatal: branch name required",
            "Name the branch to delete, e.g. \"git branch -d feature\".",
        ));
    };

    if !state.has_branch(name) {
        return Err(CommandError::not_found(
            format!("error: branch '{}' not found.", name),
            "The specified branch does not exist.",
        ));
    }

    if state.is_current_branch(name) {
        return Err(CommandError::conflict(
            format!("error: Cannot delete branch '{}' checked out", name),
            "Switch to another branch before deleting this one.",
        ));
    }

    Ok(
        Outcome::success(
            format!("Deleted branch {}.", name),
            format!("Deletes the branch named '{}'.", name),
        )
        .with_state(state.clone().without_branch(name)),
    )
}
