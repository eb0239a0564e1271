//! Auth server test support utilities
//!
//! Shared helpers for unit and integration tests: one-time log initialization,
//! assertions on the `{"error": ...}` response contract, and unique test data.

pub mod error_body;
pub mod logging;
pub mod unique_helpers;

pub use unique_helpers::{unique_email, unique_str};
