//! Configuration module for web UI builds
//!
//! This module provides the `BuildConfig` struct and its type-safe builder
//! with validation and defaults matching the command line.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{BuildConfigBuilder, WithSourceDir, default_output_path};
pub use types::BuildConfig;
