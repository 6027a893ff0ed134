//! CLI command implementations

pub mod eval;
