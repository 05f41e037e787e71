//! UI module tests
//!
//! Controller tests run without a display; GTK widgets are not exercised.

#[cfg(test)]
mod controller_tests;
