//! Test utilities shared across the ghorg workspace
//!
//! This crate provides common testing infrastructure including:
//! - A mock GitHub API with a client wired to it ([`GitHubMockGuard`])
//! - Canned GitHub JSON bodies ([`fixtures`])
//! - Test-friendly tracing output ([`init_test_tracing`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod fixtures;
pub mod github;
pub mod logging;

// Re-export commonly used items
pub use github::GitHubMockGuard;
pub use logging::init_test_tracing;
