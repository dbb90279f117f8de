use crate::common::session::session_with;
use gitsim::areas::repository::RepositoryState;
use gitsim::areas::session::{Session, Submission};
use gitsim::config::SessionConfig;
use proptest::prelude::*;

fn command() -> impl Strategy<Value = String> {
    let branch = prop::sample::select(vec!["main", "feature", "hotfix", "Feature"]);
    let file = prop::sample::select(vec!["README.md", "index.js", "missing.txt"]);

    prop_oneof![
        Just("git init".to_string()),
        Just("git status".to_string()),
        Just("git add .".to_string()),
        file.prop_map(|file| format!("git add {}", file)),
        "[a-z]{1,8}".prop_map(|message| format!("git commit -m \"{}\"", message)),
        Just("git log".to_string()),
        Just("git branch".to_string()),
        branch.clone().prop_map(|name| format!("git branch {}", name)),
        branch.clone().prop_map(|name| format!("git branch -d {}", name)),
        branch.clone().prop_map(|name| format!("git checkout {}", name)),
        branch.clone().prop_map(|name| format!("git checkout -b {}", name)),
        branch.prop_map(|name| format!("git merge {}", name)),
        Just("git remote add origin https://github.com/user/repo.git".to_string()),
        Just("git push".to_string()),
        Just("git pull".to_string()),
        Just("clear".to_string()),
        Just("help".to_string()),
    ]
}

fn fresh_session() -> Session {
    session_with(SessionConfig::default())
}

fn assert_consistent(state: &RepositoryState) {
    for file in state.staged_files() {
        assert!(state.has_working_file(file), "staged {} is not a working file", file);
    }

    let mut branches = state.branches().to_vec();
    branches.sort();
    branches.dedup();
    assert_eq!(branches.len(), state.branches().len(), "duplicate branch names");

    match state.current_branch() {
        Some(current) => assert!(state.has_branch(current)),
        None => assert!(!state.is_initialized()),
    }
}

proptest! {
    #[test]
    fn state_stays_consistent_after_any_sequence(commands in prop::collection::vec(command(), 1..40)) {
        let mut session = fresh_session();

        for command in &commands {
            session.submit(command);
            assert_consistent(session.state());
        }
    }

    #[test]
    fn failed_commands_never_change_the_state(commands in prop::collection::vec(command(), 1..40)) {
        let mut session = fresh_session();

        for command in &commands {
            let before = session.state().clone();
            if let Submission::Recorded(result) = session.submit(command)
                && result.is_error()
            {
                prop_assert_eq!(session.state(), &before);
            }
        }
    }

    #[test]
    fn successful_commits_add_one_commit_and_empty_the_stage(
        commands in prop::collection::vec(command(), 1..40)
    ) {
        let mut session = fresh_session();

        for command in &commands {
            let commits_before = session.state().commits().len();
            let submission = session.submit(command);

            let committed = command.starts_with("git commit")
                && submission.result().is_some_and(|result| !result.is_error());
            if committed {
                prop_assert_eq!(session.state().commits().len(), commits_before + 1);
                prop_assert!(session.state().staged_files().is_empty());
            }
        }
    }

    #[test]
    fn log_lists_commits_newest_first(messages in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let mut session = fresh_session();
        session.submit("git init");
        for message in &messages {
            session.submit("git add .");
            session.submit(&format!("git commit -m \"{}\"", message));
        }

        let output = session.submit("git log").result().map(|result| result.output.clone());
        let logged = output
            .unwrap_or_default()
            .lines()
            .filter_map(|line| line.strip_prefix("    ").map(str::to_string))
            .collect::<Vec<_>>();
        let expected = messages.iter().rev().cloned().collect::<Vec<_>>();

        prop_assert_eq!(logged, expected);
    }

    #[test]
    fn init_is_idempotent(commands in prop::collection::vec(command(), 0..20)) {
        let mut session = fresh_session();
        session.submit("git init");
        for command in &commands {
            session.submit(command);
        }
        let before = session.state().clone();

        let result = session.submit("git init");

        prop_assert!(result.result().is_some_and(|result| result.output.starts_with("Reinitialized")));
        prop_assert_eq!(session.state(), &before);
    }

    #[test]
    fn history_grows_by_one_per_recorded_line(commands in prop::collection::vec(command(), 1..30)) {
        let mut session = fresh_session();

        for command in &commands {
            let before = session.history().len();
            match session.submit(command) {
                Submission::Recorded(_) => prop_assert_eq!(session.history().len(), before + 1),
                Submission::Cleared => prop_assert!(session.history().is_empty()),
                Submission::Ignored => prop_assert_eq!(session.history().len(), before),
            }
        }
    }
}
