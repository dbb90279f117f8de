//! Session configuration
//!
//! Defaults describe the fictitious project used in lessons. Every value can be
//! overridden from the environment:
//!
//! - `GITSIM_WORKDIR`: directory shown in messages (default `~/my-project`)
//! - `GITSIM_DEFAULT_BRANCH`: branch created by `git init` (default `main`)
//! - `GITSIM_WORKING_FILES`: comma-separated seed files
//!   (default `README.md,index.js`)

use anyhow::Context;

pub const WORKDIR_VAR: &str = "GITSIM_WORKDIR";
pub const DEFAULT_BRANCH_VAR: &str = "GITSIM_DEFAULT_BRANCH";
pub const WORKING_FILES_VAR: &str = "GITSIM_WORKING_FILES";

const DEFAULT_WORKDIR: &str = "~/my-project";
const DEFAULT_BRANCH: &str = "main";
const DEFAULT_WORKING_FILES: [&str; 2] = ["README.md", "index.js"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    workdir: String,
    default_branch: String,
    working_files: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            workdir: DEFAULT_WORKDIR.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
            working_files: DEFAULT_WORKING_FILES.map(String::from).to_vec(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from `GITSIM_*` environment variables
    ///
    /// Unset variables keep their defaults; set-but-invalid ones are errors.
    pub fn load_from_env() -> anyhow::Result<Self> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(workdir) = lookup(WORKDIR_VAR) {
            config = config
                .with_workdir(workdir)
                .with_context(|| format!("{WORKDIR_VAR} is invalid"))?;
        }
        if let Some(branch) = lookup(DEFAULT_BRANCH_VAR) {
            config = config
                .with_default_branch(branch)
                .with_context(|| format!("{DEFAULT_BRANCH_VAR} is invalid"))?;
        }
        if let Some(files) = lookup(WORKING_FILES_VAR) {
            let files = files.split(',').map(|file| file.trim().to_string());
            config = config
                .with_working_files(files)
                .with_context(|| format!("{WORKING_FILES_VAR} is invalid"))?;
        }

        Ok(config)
    }

    pub fn with_workdir(mut self, workdir: impl Into<String>) -> anyhow::Result<Self> {
        let workdir = workdir.into().trim().trim_end_matches('/').to_string();
        if workdir.is_empty() {
            anyhow::bail!("working directory cannot be empty");
        }

        self.workdir = workdir;
        Ok(self)
    }

    pub fn with_default_branch(mut self, branch: impl Into<String>) -> anyhow::Result<Self> {
        let branch = branch.into().trim().to_string();
        if branch.is_empty() {
            anyhow::bail!("default branch cannot be empty");
        }
        if branch.chars().any(char::is_whitespace) || branch.starts_with('-') {
            anyhow::bail!("invalid default branch name: {}", branch);
        }

        self.default_branch = branch;
        Ok(self)
    }

    pub fn with_working_files(
        mut self,
        files: impl IntoIterator<Item = String>,
    ) -> anyhow::Result<Self> {
        let files = files
            .into_iter()
            .filter(|file| !file.is_empty())
            .collect::<Vec<_>>();
        if let Some(file) = files.iter().find(|file| file.chars().any(char::is_whitespace)) {
            anyhow::bail!("file names cannot contain whitespace: '{}'", file);
        }
        if files.iter().any(|file| file == ".") {
            anyhow::bail!("'.' is reserved for staging every file");
        }

        self.working_files = files;
        Ok(self)
    }

    pub fn workdir(&self) -> &str {
        &self.workdir
    }

    pub fn default_branch(&self) -> &str {
        &self.default_branch
    }

    pub fn working_files(&self) -> &[String] {
        &self.working_files
    }

    /// Path of the simulated `.git` directory, as printed by `git init`
    pub fn git_dir(&self) -> String {
        format!("{}/.git/", self.workdir)
    }
}
