use crate::common::run;
use crate::common::session::init_session;
use gitsim::areas::session::Session;
use gitsim::artifacts::command::result::Classification;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::single_file(&["git add index.js"], &["index.js"])]
#[case::repeated_file(&["git add index.js", "git add index.js"], &["index.js"])]
#[case::staging_order_is_kept(&["git add index.js", "git add README.md"], &["index.js", "README.md"])]
#[case::several_files_at_once(&["git add README.md index.js"], &["README.md", "index.js"])]
fn named_files_are_staged(
    mut init_session: Session,
    #[case] commands: &[&str],
    #[case] expected: &[&str],
) {
    for command in commands {
        let result = run(&mut init_session, command);
        assert_eq!(result.classification, Classification::Success);
    }

    assert_eq!(init_session.state().staged_files(), expected);
}

#[rstest]
fn file_names_are_case_sensitive(mut init_session: Session) {
    let result = run(&mut init_session, "git add readme.md");

    assert_eq!(result.classification, Classification::Error);
    assert_eq!(
        result.output,
        "fatal: pathspec 'readme.md' did not match any files"
    );
    assert!(init_session.state().staged_files().is_empty());
}
