//! Resource inlining functionality
//!
//! This module rewrites the main markup so that stylesheet and script
//! references are replaced by the referenced file contents, producing a
//! single self-contained document.

// Sub-modules
pub mod orchestrator;
pub mod references;
pub mod types;

// Re-exports for public API
pub use orchestrator::{INLINE_ORDER, inline_resources};
pub use references::{locate_references, relative_asset_path};
pub use types::{InliningResult, ResolutionState, ResourceReference};
