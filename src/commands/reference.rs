//! Command reference catalog
//!
//! The commands a learner meets in the lessons, grouped by category. The
//! catalog is wider than the simulator: entries such as `git pull` are listed
//! for reference even though typing them yields an unknown-command error.

use crate::commands::COMMANDS;

/// Lesson grouping of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Setup,
    Basic,
    Information,
    Branching,
    Remote,
    Advanced,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Setup,
        Category::Basic,
        Category::Information,
        Category::Branching,
        Category::Remote,
        Category::Advanced,
    ];
}

impl From<&Category> for &str {
    fn from(category: &Category) -> Self {
        match category {
            Category::Setup => "Setup",
            Category::Basic => "Basic",
            Category::Information => "Information",
            Category::Branching => "Branching",
            Category::Remote => "Remote",
            Category::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &str = self.into();
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub command: &'static str,
    pub description: &'static str,
    pub category: Category,
}

impl ReferenceEntry {
    /// Whether typing this command runs a simulated handler
    pub fn is_simulated(&self) -> bool {
        COMMANDS.contains_key(self.command)
    }
}

const fn entry(
    command: &'static str,
    description: &'static str,
    category: Category,
) -> ReferenceEntry {
    ReferenceEntry {
        command,
        description,
        category,
    }
}

pub static REFERENCE: [ReferenceEntry; 20] = [
    entry("git init", "Initialize a new Git repository", Category::Setup),
    entry("git config", "Get and set repository options", Category::Setup),
    entry("git status", "Show working tree status", Category::Basic),
    entry("git add", "Add files to staging area", Category::Basic),
    entry("git commit", "Record changes to repository", Category::Basic),
    entry("git log", "Show commit history", Category::Information),
    entry("git diff", "Show changes between commits", Category::Information),
    entry("git show", "Show various types of objects", Category::Information),
    entry("git branch", "List, create, or delete branches", Category::Branching),
    entry("git checkout", "Switch branches or restore files", Category::Branching),
    entry("git merge", "Join development histories", Category::Branching),
    entry("git remote", "Manage remote repositories", Category::Remote),
    entry("git push", "Upload changes to remote", Category::Remote),
    entry("git pull", "Download changes from remote", Category::Remote),
    entry("git clone", "Copy a repository", Category::Remote),
    entry("git fetch", "Download objects from remote", Category::Remote),
    entry("git reset", "Reset current HEAD to specified state", Category::Advanced),
    entry("git rebase", "Reapply commits on top of another base", Category::Advanced),
    entry("git stash", "Temporarily store changes", Category::Advanced),
    entry("git tag", "Create, list, delete tags", Category::Advanced),
];

/// Suggested first commands for a learner
pub const QUICK_COMMANDS: [&str; 8] = [
    "git init",
    "git status",
    "git add .",
    "git commit -m \"Initial commit\"",
    "git log",
    "git branch",
    "clear",
    "help",
];

pub fn by_category(category: Category) -> impl Iterator<Item = &'static ReferenceEntry> {
    REFERENCE
        .iter()
        .filter(move |entry| entry.category == category)
}

/// Catalog grouped by category, one aligned line per command
pub fn render() -> String {
    let width = REFERENCE
        .iter()
        .map(|entry| entry.command.len())
        .max()
        .unwrap_or_default();

    let mut sections = Vec::new();
    for category in Category::ALL {
        let mut lines = vec![category.to_string()];
        lines.extend(by_category(category).map(|entry| {
            let marker = if entry.is_simulated() { "" } else { " (not simulated)" };
            format!(
                "  {:<width$}  {}{}",
                entry.command,
                entry.description,
                marker,
                width = width
            )
        }));
        sections.push(lines.join("\n"));
    }

    sections.join("\n\n") + "\n"
}
