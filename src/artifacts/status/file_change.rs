const LABEL_WIDTH: usize = 12;

/// How a working file shows up in `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileChangeType {
    /// Staged for the next commit
    Added,
    /// Present in the working directory but not staged
    Untracked,
}

impl From<&FileChangeType> for &str {
    fn from(change: &FileChangeType) -> Self {
        match change {
            FileChangeType::Added => "new file:",
            FileChangeType::Untracked => "",
        }
    }
}

/// One line of the long status format
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileChange<'s> {
    pub(crate) change: FileChangeType,
    pub(crate) file: &'s str,
}

impl std::fmt::Display for FileChange<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = (&self.change).into();
        if label.is_empty() {
            write!(f, "\t{}", self.file)
        } else {
            write!(f, "\t{:<width$}{}", label, self.file, width = LABEL_WIDTH)
        }
    }
}
