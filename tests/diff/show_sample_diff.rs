use crate::common::run;
use crate::common::session::{init_session, session};
use gitsim::areas::session::Session;
use gitsim::artifacts::command::result::Classification;
use gitsim::commands::porcelain::diff::SAMPLE_DIFF;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn diff_shows_the_sample_patch(mut init_session: Session) {
    let result = run(&mut init_session, "git diff");

    assert_eq!(result.classification, Classification::Info);
    assert_eq!(result.output, SAMPLE_DIFF);
    assert!(result.output.starts_with("diff --git a/README.md b/README.md"));
    assert!(result.output.ends_with("+Added a new line!"));
}

#[rstest]
fn diff_requires_a_repository(mut session: Session) {
    let result = run(&mut session, "git diff");

    assert_eq!(result.classification, Classification::Error);
    assert_eq!(
        result.explanation,
        "You need to initialize a Git repository first with \"git init\"."
    );
}
