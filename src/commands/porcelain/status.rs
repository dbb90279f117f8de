use crate::areas::repository::RepositoryState;
use crate::artifacts::command::error::CommandError;
use crate::artifacts::command::outcome::Outcome;
use crate::artifacts::status::status_info::StatusInfo;
use crate::commands::{HandlerContext, Invocation};

// Terminology:
// - staged files: working files added to the staging area since the last commit
// - untracked files: working files that are not staged
pub fn status(
    state: &RepositoryState,
    _invocation: &Invocation<'_>,
    _context: &mut HandlerContext<'_>,
) -> Result<Outcome, CommandError> {
    let report = StatusInfo::collect(state);

    Ok(Outcome::info(
        report.render(),
        "Shows the current state of your working directory and staging area.",
    ))
}
