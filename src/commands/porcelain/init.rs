use crate::areas::repository::RepositoryState;
use crate::artifacts::command::error::CommandError;
use crate::artifacts::command::outcome::Outcome;
use crate::commands::{HandlerContext, Invocation};

const EXPLANATION: &str = "Creates a new Git repository in the current directory.";

/// Always succeeds; only the first call creates the default branch
pub fn init(
    state: &RepositoryState,
    _invocation: &Invocation<'_>,
    context: &mut HandlerContext<'_>,
) -> Result<Outcome, CommandError> {
    let git_dir = context.config.git_dir();

    if state.is_initialized() {
        return Ok(Outcome::success(
            format!("Reinitialized existing Git repository in {}", git_dir),
            EXPLANATION,
        ));
    }

    let next_state = state
        .clone()
        .initialized_on(context.config.default_branch());

    Ok(Outcome::success(
        format!("Initialized empty Git repository in {}", git_dir),
        EXPLANATION,
    )
    .with_state(next_state))
}
