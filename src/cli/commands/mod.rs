//! CLI command implementations.

pub mod rule;
