//! Simulator data structures
//!
//! This module contains the value types shared by the session and the handlers:
//!
//! - `command`: Command line parsing, handler outcomes, results and errors
//! - `core`: Shared utilities (clock, pager wrapper)
//! - `objects`: Commit objects and commit id generation
//! - `status`: Working tree status report

pub mod command;
pub mod core;
pub mod objects;
pub mod status;
