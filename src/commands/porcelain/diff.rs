use crate::areas::repository::RepositoryState;
use crate::artifacts::command::error::CommandError;
use crate::artifacts::command::outcome::Outcome;
use crate::commands::{HandlerContext, Invocation};

/// Illustrative patch; the simulator has no file contents to compare
pub const SAMPLE_DIFF: &str = r#"diff --git a/README.md b/README.md
index 83db48f..84d55c5 100644
--- a/README.md
+++ b/README.md
@@ -1,3 +1,4 @@
 # My Project
 
 This is my awesome project.
+Added a new line!"#;

pub fn diff(
    _state: &RepositoryState,
    _invocation: &Invocation<'_>,
    _context: &mut HandlerContext<'_>,
) -> Result<Outcome, CommandError> {
    Ok(Outcome::info(
        SAMPLE_DIFF,
        "Shows the differences between your working directory and the last commit.",
    ))
}
