//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Type tests (decoding, Section parsing)
//! - View state machine tests
//! - Section rendering tests

#[cfg(test)]
mod state_tests;
