//! Working tree status report
//!
//! The simulator has no file contents, so status is computed purely from the
//! repository state: staged files are "new file" entries and every working
//! file that is not staged is listed as untracked.
//!
//! ## Components
//!
//! - `file_change`: Change categories and their labels
//! - `status_info`: Status aggregation and long-format rendering

pub mod file_change;
pub mod status_info;
