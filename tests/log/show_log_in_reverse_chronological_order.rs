use crate::common::session::{FIXED_DATE_LINE, committed_session};
use crate::common::{run, run_all};
use gitsim::areas::session::Session;
use gitsim::artifacts::command::result::Classification;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn single_commit_in_medium_format(mut committed_session: Session) {
    let result = run(&mut committed_session, "git log");

    assert_eq!(result.classification, Classification::Info);
    assert_eq!(
        result.output,
        format!("commit 0000001\n{}\n\n    Initial commit", FIXED_DATE_LINE)
    );
}

#[rstest]
fn most_recent_commit_comes_first(mut committed_session: Session) {
    let result = run_all(
        &mut committed_session,
        &[
            "git add README.md",
            r#"git commit -m "second""#,
            "git add index.js",
            r#"git commit -m "third""#,
            "git log",
        ],
    );

    let ids = result
        .output
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .collect::<Vec<_>>();
    assert_eq!(ids, ["0000003", "0000002", "0000001"]);

    let messages = result
        .output
        .lines()
        .filter_map(|line| line.strip_prefix("    "))
        .collect::<Vec<_>>();
    assert_eq!(messages, ["third", "second", "Initial commit"]);
}
