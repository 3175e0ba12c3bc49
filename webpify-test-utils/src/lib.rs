//! Test utilities for webpify
//!
//! Fixture builders shared by the core and CLI test suites: encoded sample
//! images and scratch directory trees with files and symlinks.

pub mod builders;

// Re-export commonly used types
pub use builders::{SampleImage, TestTree};
