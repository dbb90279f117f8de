use crate::common::{run, run_all};
use crate::common::session::init_session;
use gitsim::areas::session::Session;
use gitsim::artifacts::command::result::Classification;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn listing_without_remotes_prints_nothing(mut init_session: Session) {
    let result = run(&mut init_session, "git remote");

    assert_eq!(result.classification, Classification::Info);
    assert_eq!(result.output, "");
}

#[rstest]
fn added_remotes_are_listed_in_order(mut init_session: Session) {
    let result = run_all(
        &mut init_session,
        &[
            "git remote add origin https://github.com/user/repo.git",
            "git remote add upstream https://github.com/team/repo.git",
            "git remote",
        ],
    );

    assert_eq!(result.output, "origin\nupstream");
    assert_eq!(init_session.state().remotes(), ["origin", "upstream"]);
}

#[rstest]
fn adding_a_remote_is_silent(mut init_session: Session) {
    let result = run(&mut init_session, "git remote add origin git@host:repo.git");

    assert_eq!(result.classification, Classification::Success);
    assert_eq!(result.output, "");
    assert_eq!(result.explanation, "Adds a new remote named 'origin'.");
}

#[rstest]
#[case::missing_url("git remote add origin")]
#[case::missing_name("git remote add")]
#[case::unsupported_switch("git remote -v")]
fn malformed_remote_commands_print_usage(mut init_session: Session, #[case] command: &str) {
    let result = run(&mut init_session, command);

    assert_eq!(result.classification, Classification::Error);
    assert_eq!(result.output, "usage: git remote add <name> <url>");
    assert!(init_session.state().remotes().is_empty());
}

#[rstest]
fn duplicate_remotes_conflict(mut init_session: Session) {
    let result = run_all(
        &mut init_session,
        &[
            "git remote add origin https://a.example/repo.git",
            "git remote add origin https://b.example/repo.git",
        ],
    );

    assert_eq!(result.classification, Classification::Error);
    assert_eq!(result.output, "error: remote origin already exists.");
    assert_eq!(init_session.state().remotes(), ["origin"]);
}
