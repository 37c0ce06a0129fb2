//! Property-based tests for Enroll
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Test Modules
//!
//! - `validator_props`: Tests for field validation
//!   - Every in-range name + well-formed email is accepted
//!   - Accepted values are the trimmed input, unchanged in content
//!   - Out-of-range inputs are rejected with exactly the violated rule
//!   - Identical input yields identical results
//!
//! - `wizard_props`: Tests for the wizard state machine
//!   - A record is pending iff the wizard reached Summary (or came back
//!     from it via go_back)
//!   - confirm() always lands on Details with no pending record
//!   - Misuse (wrong-step calls) never mutates state
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable.

mod validator_props;
mod wizard_props;
