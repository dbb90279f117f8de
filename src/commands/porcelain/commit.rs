use crate::areas::repository::RepositoryState;
use crate::artifacts::command::error::CommandError;
use crate::artifacts::command::outcome::Outcome;
use crate::artifacts::objects::commit::Commit;
use crate::commands::{HandlerContext, Invocation};
use regex::Regex;
use std::sync::LazyLock;

const DEFAULT_MESSAGE: &str = "Initial commit";

static MESSAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:-m|--message)\s+(?:"([^"]+)"|'([^']+)')"#)
        .expect("commit message pattern is valid")
});

/// Quoted `-m`/`--message` value of a raw command line, if any
pub fn capture_message(raw: &str) -> Option<&str> {
    MESSAGE_PATTERN
        .captures(raw)
        .and_then(|captures| captures.get(1).or_else(|| captures.get(2)))
        .map(|message| message.as_str())
}

pub fn commit(
    state: &RepositoryState,
    invocation: &Invocation<'_>,
    context: &mut HandlerContext<'_>,
) -> Result<Outcome, CommandError> {
    let branch = state.current_branch().unwrap_or_default();

    if state.staged_files().is_empty() {
        return Err(CommandError::precondition(
            format!("On branch {}\nnothing to commit, working tree clean", branch),
            "There are no staged changes to commit. Use \"git add\" first.",
        ));
    }

    let message = capture_message(invocation.raw)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .unwrap_or(DEFAULT_MESSAGE);
    let id = context.fresh_commit_id(state);
    let is_root = if state.commits().is_empty() {
        " (root-commit)"
    } else {
        ""
    };
    let file_count = state.staged_files().len();

    let output = format!(
        "[{}{} {}] {}\n {} file{} changed",
        branch,
        is_root,
        id,
        message,
        file_count,
        if file_count == 1 { "" } else { "s" }
    );

    let commit = Commit::new(
        id,
        message.to_string(),
        branch.to_string(),
        context.clock().now(),
    );

    Ok(Outcome::success(
        output,
        "Creates a new commit with the staged changes and the provided message.",
    )
    .with_state(state.clone().with_commit(commit)))
}
