//! Porcelain commands (the simulated Git surface)
//!
//! Each module exposes one pure handler with the `Handler` signature. The
//! dispatcher has already checked that the repository is initialized for every
//! command except `init`.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `status`: Show staged and untracked files
//! - `add`: Stage files for commit
//! - `commit`: Record the staged files
//! - `log`: Show commit history
//! - `branch`: List, create or delete branches
//! - `checkout`: Switch branches
//! - `merge`: Merge a branch into the current one
//! - `diff`: Show changes
//! - `remote`: List or add remotes
//! - `push`: Upload commits to a remote
//! - `config`: Set or list configuration

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod config;
pub mod diff;
pub mod init;
pub mod log;
pub mod merge;
pub mod push;
pub mod remote;
pub mod status;
