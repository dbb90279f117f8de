use crate::areas::repository::RepositoryState;
use crate::artifacts::command::error::CommandError;
use crate::artifacts::command::outcome::Outcome;
use crate::commands::{HandlerContext, Invocation};

const ALL_FILES: &str = ".";

/// Stage `.` (every working file) or the named working files
///
/// Either every named path is staged or, if one of them does not match a
/// working file, none is. This holds when `.` is among the paths too.
pub fn add(
    state: &RepositoryState,
    invocation: &Invocation<'_>,
    _context: &mut HandlerContext<'_>,
) -> Result<Outcome, CommandError> {
    if invocation.args.is_empty() {
        return Err(CommandError::usage(
            "Nothing specified, nothing added.\nMaybe you wanted to say 'git add .'?",
            "You need to specify which files to add.",
        ));
    }

    if let Some(missing) = invocation
        .args
        .iter()
        .find(|path| *path != ALL_FILES && !state.has_working_file(path))
    {
        return Err(CommandError::not_found(
            format!("fatal: pathspec '{}' did not match any files", missing),
            "The specified file does not exist in the working directory.",
        ));
    }

    if invocation.args.iter().any(|path| path == ALL_FILES) {
        return Ok(Outcome::success(
            "",
            "Stages all files in the current directory for the next commit.",
        )
        .with_state(state.clone().with_all_staged()));
    }

    let next_state = invocation
        .args
        .iter()
        .fold(state.clone(), |next, path| next.with_staged(path));

    Ok(Outcome::success(
        "",
        format!("Stages {} for the next commit.", invocation.args.join(", ")),
    )
    .with_state(next_state))
}
