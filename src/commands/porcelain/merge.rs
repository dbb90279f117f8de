use crate::areas::repository::RepositoryState;
use crate::artifacts::command::error::CommandError;
use crate::artifacts::command::outcome::Outcome;
use crate::commands::{HandlerContext, Invocation};

const MERGE_SUMMARY: &str = "Merge made by the 'recursive' strategy.\n 1 file changed, 1 insertion(+)";

/// Merge an existing branch into the current one
///
/// Histories are never combined: any other existing branch merges cleanly and
/// the commit list is left as it is.
pub fn merge(
    state: &RepositoryState,
    invocation: &Invocation<'_>,
    _context: &mut HandlerContext<'_>,
) -> Result<Outcome, CommandError> {
    let Some(target) = invocation.arg(0) else {
        return Err(CommandError::usage(
            "usage: git merge <branch>",
            "Name the branch you want to merge into the current one.",
        ));
    };

    if !state.has_branch(target) {
        return Err(CommandError::not_found(
            format!("merge: {} - not something we can merge", target),
            "The specified branch does not exist.",
        ));
    }

    if state.is_current_branch(target) {
        return Ok(Outcome::info(
            "Already up to date.",
            "A branch cannot be merged into itself; there is nothing new to bring in.",
        ));
    }

    Ok(Outcome::success(
        MERGE_SUMMARY,
        format!("Merges the '{}' branch into the current branch.", target),
    ))
}
