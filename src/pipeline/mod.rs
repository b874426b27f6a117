//! Build pipeline
//!
//! Load the main document, embed its stylesheets and scripts, optionally
//! minify the result and escape it for the raw string literal. Each stage
//! produces a new string; the pipeline never writes to the asset directory.

// Sub-modules
pub mod document;
pub mod escape;
pub mod report;
pub mod runner;

// Re-exports for public API
pub use document::{Dialect, PipelineDocument, SourceText, Stage};
pub use escape::{ESCAPED_TERMINATOR, RAW_LITERAL_TERMINATOR, escape_raw_literal};
pub use report::BuildReport;
pub use runner::{BuildOutput, Pipeline};
