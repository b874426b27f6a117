//! Type-safe builder for `BuildConfig` using the typestate pattern
//!
//! The asset directory is the only required field; `build()` is only
//! available once it has been set.

use regex::Regex;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::types::BuildConfig;
use crate::errors::{BuildError, BuildResult};
use crate::utils::{DEFAULT_CONSTANT_NAME, DEFAULT_ENTRY, DEFAULT_HEADER_FILE};

static C_IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("C_IDENTIFIER_RE: hardcoded regex is valid")
});

/// Default header location: next to the asset directory, not inside it
#[must_use]
pub fn default_output_path(source_dir: &Path) -> PathBuf {
    match source_dir.parent() {
        Some(parent) => parent.join(DEFAULT_HEADER_FILE),
        None => source_dir.join(DEFAULT_HEADER_FILE),
    }
}

// Type states for the builder
pub struct WithSourceDir;

pub struct BuildConfigBuilder<State = ()> {
    pub(crate) source_dir: Option<PathBuf>,
    pub(crate) entry: String,
    pub(crate) output_path: Option<PathBuf>,
    pub(crate) minify: bool,
    pub(crate) constant_name: String,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for BuildConfigBuilder<()> {
    fn default() -> Self {
        Self {
            source_dir: None,
            entry: DEFAULT_ENTRY.to_string(),
            output_path: None,
            minify: true,
            constant_name: DEFAULT_CONSTANT_NAME.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl BuildConfig {
    /// Create a builder for configuring a `BuildConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> BuildConfigBuilder<()> {
        BuildConfigBuilder::default()
    }
}

impl BuildConfigBuilder<()> {
    pub fn source_dir(self, dir: impl Into<PathBuf>) -> BuildConfigBuilder<WithSourceDir> {
        BuildConfigBuilder {
            source_dir: Some(dir.into()),
            entry: self.entry,
            output_path: self.output_path,
            minify: self.minify,
            constant_name: self.constant_name,
            _phantom: PhantomData,
        }
    }
}

impl BuildConfigBuilder<WithSourceDir> {
    /// Validate and build the config
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidConfig` if the entry document name is empty
    /// or the constant name is not a C identifier.
    pub fn build(self) -> BuildResult<BuildConfig> {
        let source_dir = self
            .source_dir
            .ok_or_else(|| BuildError::InvalidConfig("source directory is required".into()))?;

        if self.entry.trim().is_empty() {
            return Err(BuildError::InvalidConfig(
                "entry document name must not be empty".into(),
            ));
        }

        if !C_IDENTIFIER_RE.is_match(&self.constant_name) {
            return Err(BuildError::InvalidConfig(format!(
                "constant name '{}' is not a valid C identifier",
                self.constant_name
            )));
        }

        let output_path = self
            .output_path
            .unwrap_or_else(|| default_output_path(&source_dir));

        Ok(BuildConfig {
            source_dir,
            entry: self.entry,
            output_path,
            minify: self.minify,
            constant_name: self.constant_name,
        })
    }
}
