//! Simulated commit record
//!
//! ```text
//! commit <id>
//! Date:   <weekday> <month> <day> <hh:mm:ss> <year> <tz>
//!
//!     <message>
//! ```

use crate::artifacts::objects::object_id::CommitId;
use chrono::{DateTime, FixedOffset};
use derive_new::new;

/// A commit appended to the session history
///
/// Commits are created only by the commit handler and are never modified.
/// `branch` is the branch that was checked out when the commit was made.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    id: CommitId,
    message: String,
    branch: String,
    timestamp: DateTime<FixedOffset>,
}

impl Commit {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.timestamp
    }

    /// First line of the commit message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    /// Medium log format paragraph for this commit
    pub fn display_medium(&self) -> String {
        let mut paragraph = format!(
            "commit {}\nDate:   {}\n\n",
            self.id,
            self.readable_timestamp()
        );
        for line in self.message.lines() {
            paragraph.push_str(&format!("    {}\n", line));
        }

        paragraph
    }
}
