//! Simulated repository state
//!
//! `RepositoryState` is the single aggregate every handler reads. Handlers
//! never mutate it in place: they derive a new value through the consuming
//! transition methods below, and the session swaps it in wholesale once the
//! command succeeds. A failed command therefore can never leave a half-applied
//! state behind.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::CommitId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepositoryState {
    initialized: bool,
    branches: Vec<String>,
    current_branch: Option<String>,
    staged_files: Vec<String>,
    working_files: Vec<String>,
    commits: Vec<Commit>,
    remotes: Vec<String>,
}

impl RepositoryState {
    /// Uninitialized state for a session seeded with `working_files`
    pub fn new(working_files: Vec<String>) -> Self {
        let mut seeded = Vec::with_capacity(working_files.len());
        for file in working_files {
            if !seeded.contains(&file) {
                seeded.push(file);
            }
        }

        Self {
            working_files: seeded,
            ..Self::default()
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Branch names in creation order
    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    /// Checked-out branch; `None` until the repository is initialized
    pub fn current_branch(&self) -> Option<&str> {
        self.current_branch.as_deref()
    }

    pub fn staged_files(&self) -> &[String] {
        &self.staged_files
    }

    pub fn working_files(&self) -> &[String] {
        &self.working_files
    }

    /// Commits in creation order, oldest first
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn remotes(&self) -> &[String] {
        &self.remotes
    }

    pub fn has_branch(&self, name: &str) -> bool {
        self.branches.iter().any(|branch| branch == name)
    }

    pub fn is_current_branch(&self, name: &str) -> bool {
        self.current_branch() == Some(name)
    }

    pub fn has_working_file(&self, file: &str) -> bool {
        self.working_files.iter().any(|working| working == file)
    }

    pub fn is_staged(&self, file: &str) -> bool {
        self.staged_files.iter().any(|staged| staged == file)
    }

    pub fn has_remote(&self, name: &str) -> bool {
        self.remotes.iter().any(|remote| remote == name)
    }

    pub fn has_commit_id(&self, id: &CommitId) -> bool {
        self.commits.iter().any(|commit| commit.id() == id)
    }

    /// Working files that are not staged, in working-directory order
    pub fn untracked_files(&self) -> impl Iterator<Item = &String> {
        self.working_files
            .iter()
            .filter(|file| !self.is_staged(file))
    }

    pub(crate) fn initialized_on(mut self, default_branch: &str) -> Self {
        self.initialized = true;
        self.branches = vec![default_branch.to_string()];
        self.current_branch = Some(default_branch.to_string());
        self
    }

    pub(crate) fn with_branch(mut self, name: &str) -> Self {
        if !self.has_branch(name) {
            self.branches.push(name.to_string());
        }
        self
    }

    pub(crate) fn without_branch(mut self, name: &str) -> Self {
        self.branches.retain(|branch| branch != name);
        self
    }

    pub(crate) fn switched_to(mut self, name: &str) -> Self {
        self.current_branch = Some(name.to_string());
        self
    }

    /// Stage one working file; unknown files are left to the caller to reject
    pub(crate) fn with_staged(mut self, file: &str) -> Self {
        if self.has_working_file(file) && !self.is_staged(file) {
            self.staged_files.push(file.to_string());
        }
        self
    }

    pub(crate) fn with_all_staged(mut self) -> Self {
        self.staged_files = self.working_files.clone();
        self
    }

    /// Record a commit; the staging area is emptied
    pub(crate) fn with_commit(mut self, commit: Commit) -> Self {
        self.commits.push(commit);
        self.staged_files.clear();
        self
    }

    pub(crate) fn with_remote(mut self, name: &str) -> Self {
        if !self.has_remote(name) {
            self.remotes.push(name.to_string());
        }
        self
    }
}

/// Read-only snapshot, as shown next to the terminal
impl std::fmt::Display for RepositoryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.initialized {
            return writeln!(f, "Repository: not initialized");
        }

        writeln!(f, "Repository: initialized")?;
        writeln!(
            f,
            "Current branch: {}",
            self.current_branch().unwrap_or_default()
        )?;
        writeln!(f, "Branches: {}", list_or_none(&self.branches))?;
        writeln!(f, "Staged files: {}", list_or_none(&self.staged_files))?;
        writeln!(f, "Working files: {}", list_or_none(&self.working_files))?;
        writeln!(f, "Remotes: {}", list_or_none(&self.remotes))?;
        writeln!(f, "Commits: {}", self.commits.len())?;
        for commit in self.commits.iter().rev() {
            writeln!(
                f,
                "  {} {} ({})",
                commit.id(),
                commit.short_message(),
                commit.branch()
            )?;
        }

        Ok(())
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
