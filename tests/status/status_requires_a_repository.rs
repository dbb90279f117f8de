use crate::common::run;
use crate::common::session::session;
use gitsim::areas::session::Session;
use gitsim::artifacts::command::result::Classification;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn status_before_init_is_an_error_and_changes_nothing(mut session: Session) {
    let before = session.state().clone();

    let result = run(&mut session, "git status");

    assert_eq!(result.classification, Classification::Error);
    assert_eq!(
        result.output,
        "fatal: not a git repository (or any of the parent directories): .git"
    );
    assert_eq!(session.state(), &before);
    assert_eq!(session.history().len(), 1);
}
