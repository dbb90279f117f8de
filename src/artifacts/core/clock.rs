//! Time source for commit timestamps
//!
//! The session asks a `Clock` for the current time whenever a commit is
//! created. `FixedClock` pins that time so log output can be asserted exactly.

use chrono::{DateTime, FixedOffset};
use derive_new::new;

pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        chrono::Local::now().fixed_offset()
    }
}

/// Clock that always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Parse an RFC 3339 instant such as `2024-01-01T09:30:00+00:00`
    pub fn parse(instant: &str) -> anyhow::Result<Self> {
        Ok(Self::new(DateTime::parse_from_rfc3339(instant)?))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}
