pub mod config;

/// Common utilities shared across the World-Cart client core
///
/// This crate provides shared functionality that can be used across the
/// cart and checkout crates, including:
///
/// - Configuration loading (YAML)
/// - Shared test utilities and data builders

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

// Re-export commonly used test utilities for easier access
#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{generate_unique_id, test_config};
