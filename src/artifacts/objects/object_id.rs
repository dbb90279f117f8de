//! Commit identifiers
//!
//! Ids are 7 lowercase hexadecimal characters, the length Git uses for
//! abbreviated hashes. They carry no meaning beyond identity: the simulator
//! does not hash content. Generation is pluggable so that tests can predict
//! every id a session hands out.

use crate::artifacts::objects::COMMIT_ID_LENGTH;
use sha1::{Digest, Sha1};

/// Opaque commit identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit id
    ///
    /// # Arguments
    ///
    /// * `id` - 7-character hexadecimal string
    pub fn try_parse(id: impl Into<String>) -> anyhow::Result<Self> {
        let id = id.into();
        if id.len() != COMMIT_ID_LENGTH {
            anyhow::bail!("Invalid commit ID length: {}", id.len());
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid commit ID characters: {}", id);
        }

        Ok(Self(id.to_ascii_lowercase()))
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh commit ids
///
/// Implementations must advance on every call. Uniqueness against the commits
/// already in a session is enforced by the caller, which draws again on a clash.
pub trait CommitIdGenerator {
    fn next_id(&mut self) -> CommitId;
}

/// Default generator: SHA-1 over a per-session seed and a counter
#[derive(Debug, Clone)]
pub struct HashedIds {
    seed: String,
    counter: u64,
}

impl HashedIds {
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            counter: 0,
        }
    }

    /// Seed from the wall clock and the process id, so separate sessions
    /// hand out different ids
    pub fn from_entropy() -> Self {
        let nanos = chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default();
        Self::with_seed(format!("{}:{}", nanos, std::process::id()))
    }
}

impl CommitIdGenerator for HashedIds {
    fn next_id(&mut self) -> CommitId {
        self.counter += 1;

        let mut hasher = Sha1::new();
        hasher.update(self.seed.as_bytes());
        hasher.update(self.counter.to_be_bytes());
        let digest = format!("{:x}", hasher.finalize());

        CommitId(digest[..COMMIT_ID_LENGTH].to_string())
    }
}

/// Largest id a `SequentialIds` hands out before wrapping back to `0000001`
pub const MAX_SEQUENTIAL_ID: u64 = 0xFFF_FFFF;

/// Predictable generator: `0000001`, `0000002`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    issued: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CommitIdGenerator for SequentialIds {
    fn next_id(&mut self) -> CommitId {
        self.issued = self.issued % MAX_SEQUENTIAL_ID + 1;
        CommitId(format!("{:0width$x}", self.issued, width = COMMIT_ID_LENGTH))
    }
}
