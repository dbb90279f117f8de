use crate::common::run;
use crate::common::session::{session, session_with};
use gitsim::areas::session::Session;
use gitsim::artifacts::command::result::Classification;
use gitsim::config::SessionConfig;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_creates_the_default_branch(mut session: Session) {
    let result = run(&mut session, "git init");

    assert_eq!(result.classification, Classification::Success);
    assert_eq!(
        result.output,
        "Initialized empty Git repository in ~/my-project/.git/"
    );
    assert!(session.state().is_initialized());
    assert_eq!(session.state().branches(), ["main"]);
    assert_eq!(session.state().current_branch(), Some("main"));
    assert!(session.state().commits().is_empty());
}

#[rstest]
fn init_follows_the_session_configuration() -> Result<(), Box<dyn std::error::Error>> {
    let config = SessionConfig::default()
        .with_workdir("/srv/lesson")?
        .with_default_branch("trunk")?;
    let mut session = session_with(config);

    let result = run(&mut session, "git init");

    assert_eq!(
        result.output,
        "Initialized empty Git repository in /srv/lesson/.git/"
    );
    assert_eq!(session.state().current_branch(), Some("trunk"));

    Ok(())
}

#[rstest]
fn init_is_case_insensitive(mut session: Session) {
    let result = run(&mut session, "  GIT Init  ");

    assert_eq!(result.classification, Classification::Success);
    assert_eq!(result.input, "GIT Init");
    assert!(session.state().is_initialized());
}
