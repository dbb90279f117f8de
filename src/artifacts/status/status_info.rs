use crate::areas::repository::RepositoryState;
use crate::artifacts::status::file_change::{FileChange, FileChangeType};

const STAGED_HINT: &str = "  (use \"git rm --cached <file>...\" to unstage)";
const UNTRACKED_HINT: &str =
    "  (use \"git add <file>...\" to include in what will be committed)";

/// Snapshot of what `status` reports for a repository state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo<'s> {
    pub(crate) branch: &'s str,
    pub(crate) has_commits: bool,
    pub(crate) staged: Vec<FileChange<'s>>,
    pub(crate) untracked: Vec<FileChange<'s>>,
}

impl<'s> StatusInfo<'s> {
    pub fn collect(state: &'s RepositoryState) -> Self {
        let staged = state
            .staged_files()
            .iter()
            .map(|file| FileChange {
                change: FileChangeType::Added,
                file,
            })
            .collect();
        let untracked = state
            .untracked_files()
            .map(|file| FileChange {
                change: FileChangeType::Untracked,
                file,
            })
            .collect();

        Self {
            branch: state.current_branch().unwrap_or_default(),
            has_commits: !state.commits().is_empty(),
            staged,
            untracked,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.untracked.is_empty()
    }

    /// Long status format, as printed by `git status`
    pub fn render(&self) -> String {
        let mut sections = vec![format!("On branch {}", self.branch)];

        if !self.has_commits {
            sections.push("No commits yet".to_string());
        }

        if !self.staged.is_empty() {
            sections.push(Self::render_section(
                "Changes to be committed:",
                STAGED_HINT,
                &self.staged,
            ));
        }

        if !self.untracked.is_empty() {
            sections.push(Self::render_section(
                "Untracked files:",
                UNTRACKED_HINT,
                &self.untracked,
            ));
        }

        let summary = if self.is_clean() {
            Some(if self.has_commits {
                "nothing to commit, working tree clean"
            } else {
                "nothing to commit (create/copy files and use \"git add\" to track)"
            })
        } else if self.staged.is_empty() {
            Some("nothing added to commit but untracked files present (use \"git add\" to track)")
        } else {
            None
        };
        if let Some(summary) = summary {
            sections.push(summary.to_string());
        }

        sections.join("\n\n")
    }

    fn render_section(title: &str, hint: &str, changes: &[FileChange<'_>]) -> String {
        let mut lines = vec![title.to_string(), hint.to_string()];
        lines.extend(changes.iter().map(ToString::to_string));
        lines.join("\n")
    }
}
