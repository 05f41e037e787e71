//! API module tests
//!
//! - HTTP client tests against a local axum backend
//! - Concurrent fetch and retry policy tests
//! - In-memory source tests

#[cfg(test)]
mod client_tests;
