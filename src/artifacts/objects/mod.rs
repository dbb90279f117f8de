//! Simulated commit objects
//!
//! Commits in the simulator are records, not content-addressed snapshots:
//!
//! - **Commit**: id, message, the branch that was checked out and a timestamp
//! - **CommitId**: an opaque short identifier drawn from a `CommitIdGenerator`
//!
//! Ids only need to be unique within a session, so they are produced by an
//! injectable generator instead of hashing repository content.

pub mod commit;
pub mod object_id;

/// Length of a displayed commit id, matching an abbreviated Git hash
pub const COMMIT_ID_LENGTH: usize = 7;
