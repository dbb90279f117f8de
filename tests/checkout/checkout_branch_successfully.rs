use crate::common::session::{committed_session, init_session};
use crate::common::{run, run_all};
use gitsim::areas::session::Session;
use gitsim::artifacts::command::result::Classification;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn switch_to_an_existing_branch(mut init_session: Session) {
    let result = run_all(&mut init_session, &["git branch feature", "git checkout feature"]);

    assert_eq!(result.classification, Classification::Success);
    assert_eq!(result.output, "Switched to branch 'feature'");
    assert_eq!(init_session.state().current_branch(), Some("feature"));
}

#[rstest]
fn create_and_switch_in_one_step(mut init_session: Session) {
    let result = run(&mut init_session, "git checkout -b hotfix");

    assert_eq!(result.classification, Classification::Success);
    assert_eq!(result.output, "Switched to a new branch 'hotfix'");
    assert_eq!(init_session.state().branches(), ["main", "hotfix"]);
    assert_eq!(init_session.state().current_branch(), Some("hotfix"));
}

#[rstest]
fn switching_keeps_commits_and_staged_files(mut committed_session: Session) {
    run(&mut committed_session, "git add index.js");
    let commits = committed_session.state().commits().to_vec();

    run(&mut committed_session, "git checkout -b feature");

    assert_eq!(committed_session.state().commits(), commits.as_slice());
    assert_eq!(committed_session.state().staged_files(), ["index.js"]);
}

#[rstest]
fn checking_out_the_current_branch_changes_nothing(mut init_session: Session) {
    let before = init_session.state().clone();

    let result = run(&mut init_session, "git checkout main");

    assert_eq!(result.classification, Classification::Info);
    assert_eq!(result.output, "Already on 'main'");
    assert_eq!(init_session.state(), &before);
}
