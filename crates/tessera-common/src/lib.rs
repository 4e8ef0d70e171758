//! Common utilities for the Tessera crates.
//!
//! This crate provides shared infrastructure used by the value crates:
//! - **Warning System** - colored terminal output for values that were left
//!   unchanged by an operation that could not apply to them

pub mod warning;
