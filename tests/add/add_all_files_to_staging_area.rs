use crate::common::run;
use crate::common::session::init_session;
use gitsim::areas::session::Session;
use gitsim::artifacts::command::result::Classification;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn dot_stages_every_working_file(mut init_session: Session) {
    let result = run(&mut init_session, "git add .");

    assert_eq!(result.classification, Classification::Success);
    assert_eq!(result.output, "");
    assert_eq!(init_session.state().staged_files(), ["README.md", "index.js"]);
    assert_eq!(init_session.state().untracked_files().count(), 0);
}

#[rstest]
fn staging_everything_twice_does_not_duplicate_files(mut init_session: Session) {
    run(&mut init_session, "git add README.md");
    run(&mut init_session, "git add .");
    run(&mut init_session, "git add .");

    assert_eq!(init_session.state().staged_files(), ["README.md", "index.js"]);
}
