//! Command plumbing shared by the dispatcher and the handlers
//!
//! - `parser`: Tokenizes a raw line into lookup keys and arguments
//! - `outcome`: What a handler hands back to the dispatcher
//! - `result`: The immutable history entry produced for every command
//! - `error`: In-band error taxonomy

pub mod error;
pub mod outcome;
pub mod parser;
pub mod result;
