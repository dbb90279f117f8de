use crate::common::{run, run_all};
use crate::common::session::{committed_session, init_session};
use gitsim::areas::session::Session;
use gitsim::artifacts::command::result::Classification;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn push_without_a_remote_fails(mut init_session: Session) {
    let before = init_session.state().clone();

    let result = run(&mut init_session, "git push");

    assert_eq!(result.classification, Classification::Error);
    assert_eq!(result.output, "fatal: No configured push destination.");
    assert_eq!(
        result.explanation,
        "You need to add a remote repository first with \"git remote add\"."
    );
    assert_eq!(init_session.state(), &before);
}

#[rstest]
fn push_prints_a_transcript_for_the_current_branch(mut committed_session: Session) {
    let before_push = run_all(
        &mut committed_session,
        &[
            "git remote add origin https://github.com/user/repo.git",
            "git checkout -b feature",
        ],
    );
    assert!(!before_push.is_error());
    let before = committed_session.state().clone();

    let result = run(&mut committed_session, "git push -u origin feature");

    assert_eq!(result.classification, Classification::Success);
    assert!(result.output.starts_with("Enumerating objects: 3, done.\n"));
    assert!(result.output.contains("To https://github.com/user/repo.git\n"));
    assert!(result.output.ends_with(" * [new branch]      feature -> feature"));
    assert_eq!(committed_session.state(), &before);
}
