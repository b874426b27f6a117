//! Getter methods for `BuildConfig`

use std::path::{Path, PathBuf};

use super::types::BuildConfig;

impl BuildConfig {
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Full path of the main markup document
    #[must_use]
    pub fn entry_path(&self) -> PathBuf {
        self.source_dir.join(&self.entry)
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    #[must_use]
    pub fn minify(&self) -> bool {
        self.minify
    }

    #[must_use]
    pub fn constant_name(&self) -> &str {
        &self.constant_name
    }
}
