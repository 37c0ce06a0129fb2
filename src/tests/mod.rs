//! Crate-internal test modules.
//!
//! Unit tests live in `#[cfg(test)]` blocks next to the code they cover;
//! this module holds the cross-cutting property-based suites.

mod property;
