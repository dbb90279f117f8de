//! gitsim: a deterministic Git command simulator for teaching
//!
//! The crate models a fictitious repository entirely in memory and interprets
//! free-text command lines against it, producing terminal-like output together
//! with a short explanation for the learner.
//!
//! ## Layout
//!
//! - `areas`: the repository state model and the session that owns it
//! - `artifacts`: value types (parsed commands, results, commits, status reports)
//! - `commands`: the dispatch table and one handler per simulated command
//! - `config`: session configuration
//!
//! ## Usage
//!
//! ```
//! use gitsim::areas::session::{Session, Submission};
//! use gitsim::artifacts::command::result::Classification;
//! use gitsim::config::SessionConfig;
//!
//! let mut session = Session::new(SessionConfig::default());
//! match session.submit("git init") {
//!     Submission::Recorded(result) => assert_eq!(result.classification, Classification::Success),
//!     _ => unreachable!(),
//! }
//! assert_eq!(session.state().current_branch(), Some("main"));
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
