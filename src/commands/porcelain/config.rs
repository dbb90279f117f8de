use crate::areas::repository::RepositoryState;
use crate::artifacts::command::error::CommandError;
use crate::artifacts::command::outcome::Outcome;
use crate::commands::{HandlerContext, Invocation};

const SAMPLE_SETTINGS: &str = "user.name=John Doe\n\
                               user.email=john@example.com\n\
                               core.editor=nano\n\
                               init.defaultBranch=main";

/// `config --global <key> <value>` and `config --list`
///
/// Settings are acknowledged but not stored.
pub fn config(
    _state: &RepositoryState,
    invocation: &Invocation<'_>,
    _context: &mut HandlerContext<'_>,
) -> Result<Outcome, CommandError> {
    if invocation.flag_at(0, "--global")
        && let (Some(key), Some(_value)) = (invocation.arg(1), invocation.arg(2))
    {
        return Ok(Outcome::success(
            "",
            format!("Sets the global Git configuration for {}.", key),
        ));
    }

    if invocation.flag_at(0, "--list") || invocation.flag_at(0, "-l") {
        return Ok(Outcome::info(
            SAMPLE_SETTINGS,
            "Shows all Git configuration settings.",
        ));
    }

    Err(CommandError::usage(
        "usage: git config [--global] <key> <value>",
        "Use \"git config --global <key> <value>\" or \"git config --list\".",
    ))
}
