//! prooflist-cli library
//!
//! Exposes the command implementations so they can be driven from tests.

pub mod commands;
pub mod logging;

pub use commands::types::HashArgs;
