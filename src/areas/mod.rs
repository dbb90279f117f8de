//! Session-level state
//!
//! - `repository`: The simulated repository aggregate
//! - `session`: Ownership of state and history, and the `submit` entry point

pub mod repository;
pub mod session;
