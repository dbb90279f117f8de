use crate::areas::repository::RepositoryState;
use crate::artifacts::command::error::CommandError;
use crate::artifacts::command::outcome::Outcome;
use crate::commands::{HandlerContext, Invocation};

const USAGE: &str = "usage: git remote add <name> <url>";

/// `remote` lists remotes, `remote add <name> <url>` registers one
///
/// The URL must be present but is neither validated nor stored.
pub fn remote(
    state: &RepositoryState,
    invocation: &Invocation<'_>,
    _context: &mut HandlerContext<'_>,
) -> Result<Outcome, CommandError> {
    if invocation.args.is_empty() {
        return Ok(Outcome::info(
            state.remotes().join("\n"),
            "Lists all configured remotes.",
        ));
    }

    if !invocation.flag_at(0, "add") {
        return Err(CommandError::usage(
            USAGE,
            "Only listing remotes and \"git remote add\" are supported here.",
        ));
    }

    let (Some(name), Some(_url)) = (invocation.arg(1), invocation.arg(2)) else {
        return Err(CommandError::usage(
            USAGE,
            "A remote needs both a name and a URL.",
        ));
    };

    if state.has_remote(name) {
        return Err(CommandError::conflict(
            format!("error: remote {} already exists.", name),
            "Pick another name for the new remote.",
        ));
    }

    Ok(
        Outcome::success("", format!("Adds a new remote named '{}'.", name))
            .with_state(state.clone().with_remote(name)),
    )
}
