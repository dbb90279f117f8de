use crate::areas::repository::RepositoryState;
use crate::artifacts::command::error::CommandError;
use crate::artifacts::command::outcome::Outcome;
use crate::commands::{HandlerContext, Invocation};

/// All commits, most recent first, in medium format
pub fn log(
    state: &RepositoryState,
    _invocation: &Invocation<'_>,
    _context: &mut HandlerContext<'_>,
) -> Result<Outcome, CommandError> {
    if state.commits().is_empty() {
        return Err(CommandError::precondition(
            format!(
                "fatal: your current branch '{}' does not have any commits yet",
                state.current_branch().unwrap_or_default()
            ),
            "There are no commits to show. Make your first commit!",
        ));
    }

    let output = state
        .commits()
        .iter()
        .rev()
        .map(|commit| commit.display_medium())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(Outcome::info(
        output.trim_end(),
        "Shows the commit history for the current branch.",
    ))
}
