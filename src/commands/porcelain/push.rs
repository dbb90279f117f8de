use crate::areas::repository::RepositoryState;
use crate::artifacts::command::error::CommandError;
use crate::artifacts::command::outcome::Outcome;
use crate::commands::{HandlerContext, Invocation};

/// Illustrative transcript of a successful push of the current branch
pub fn push(
    state: &RepositoryState,
    _invocation: &Invocation<'_>,
    _context: &mut HandlerContext<'_>,
) -> Result<Outcome, CommandError> {
    if state.remotes().is_empty() {
        return Err(CommandError::precondition(
            "fatal: No configured push destination.",
            "You need to add a remote repository first with \"git remote add\".",
        ));
    }

    let branch = state.current_branch().unwrap_or_default();
    let output = format!(
        "Enumerating objects: 3, done.\n\
         Counting objects: 100% (3/3), done.\n\
         Writing objects: 100% (3/3), 242 bytes | 242.00 KiB/s, done.\n\
         Total 3 (delta 0), reused 0 (delta 0)\n\
         To https://github.com/user/repo.git\n \
         * [new branch]      {branch} -> {branch}"
    );

    Ok(Outcome::success(
        output,
        "Uploads your commits to the remote repository.",
    ))
}
