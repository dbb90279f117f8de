use crate::common::{run, run_all};
use crate::common::session::init_session;
use gitsim::areas::session::Session;
use gitsim::artifacts::command::result::Classification;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn delete_an_unused_branch(mut init_session: Session) {
    let result = run_all(&mut init_session, &["git branch feature", "git branch -d feature"]);

    assert_eq!(result.classification, Classification::Success);
    assert_eq!(result.output, "Deleted branch feature.");
    assert_eq!(init_session.state().branches(), ["main"]);
}

#[rstest]
fn checked_out_branch_cannot_be_deleted(mut init_session: Session) {
    let result = run(&mut init_session, "git branch -D main");

    assert_eq!(result.classification, Classification::Error);
    assert_eq!(
        result.output,
        "error: Cannot delete branch 'main' checked out"
    );
    assert_eq!(init_session.state().branches(), ["main"]);
}

#[rstest]
fn deleting_a_missing_branch_fails(mut init_session: Session) {
    let result = run(&mut init_session, "git branch -d ghost");

    assert_eq!(result.classification, Classification::Error);
    assert_eq!(result.output, "error: branch 'ghost' not found.");
}

#[rstest]
fn delete_requires_a_name(mut init_session: Session) {
    let result = run(&mut init_session, "git branch -d");

    assert_eq!(result.classification, Classification::Error);
    assert_eq!(result.output, "fatal: branch name required");
}
