//! Build statistics

use serde::Serialize;
use std::path::PathBuf;

use super::runner::BuildOutput;
use crate::config::BuildConfig;
use crate::utils::percent_of;

/// Summary of a finished build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildReport {
    pub source_dir: PathBuf,
    pub output_path: PathBuf,
    pub minified: bool,
    /// Main document plus embedded files, as read from disk
    pub original_bytes: usize,
    /// Escaped payload embedded in the header
    pub payload_bytes: usize,
    /// Whole header file, banner included
    pub artifact_bytes: usize,
    /// `original_bytes - payload_bytes`; negative when the payload grew
    pub saved_bytes: i64,
    pub saved_percent: f64,
    /// Referenced paths that were embedded, as written in the markup
    pub inlined: Vec<String>,
    /// Referenced paths that were left in place
    pub missing: Vec<String>,
}

impl BuildReport {
    #[must_use]
    pub fn new(config: &BuildConfig, output: &BuildOutput, artifact_bytes: usize) -> Self {
        let original = i64::try_from(output.original_bytes).unwrap_or(i64::MAX);
        let payload = i64::try_from(output.payload.len()).unwrap_or(i64::MAX);
        let saved_bytes = original - payload;

        Self {
            source_dir: config.source_dir().to_path_buf(),
            output_path: config.output_path().to_path_buf(),
            minified: config.minify(),
            original_bytes: output.original_bytes,
            payload_bytes: output.payload.len(),
            artifact_bytes,
            saved_bytes,
            saved_percent: percent_of(saved_bytes, output.original_bytes),
            inlined: output.inlining.resolved().map(|r| r.path.clone()).collect(),
            missing: output.inlining.missing().map(|r| r.path.clone()).collect(),
        }
    }

    #[must_use]
    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }
}
