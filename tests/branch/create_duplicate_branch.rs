use crate::common::run;
use crate::common::session::init_session;
use gitsim::areas::session::Session;
use gitsim::artifacts::command::result::Classification;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::existing_default_branch("git branch main", "main")]
#[case::existing_created_branch("git branch feature", "feature")]
#[case::checkout_create_existing("git checkout -b feature", "feature")]
fn creating_an_existing_branch_is_a_conflict(
    mut init_session: Session,
    #[case] command: &str,
    #[case] name: &str,
) {
    run(&mut init_session, "git branch feature");
    let before = init_session.state().clone();

    let result = run(&mut init_session, command);

    assert_eq!(result.classification, Classification::Error);
    assert_eq!(
        result.output,
        format!("fatal: A branch named '{}' already exists.", name)
    );
    assert_eq!(init_session.state(), &before);
}
