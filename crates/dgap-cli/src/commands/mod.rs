//! CLI command implementations.

pub mod bounds;
pub mod eval;
pub mod interactive;
pub mod search;
pub mod verify;
