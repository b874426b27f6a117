//! Core configuration type for a web UI build

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything one build needs to know
///
/// Created through `BuildConfig::builder()`, which fills in defaults and
/// validates the constant name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Asset directory holding the main document, stylesheet and script
    pub(crate) source_dir: PathBuf,
    /// Main markup document, relative to `source_dir`
    pub(crate) entry: String,
    /// Header file to write.
    ///
    /// **INVARIANT:** Always set after `build()`; defaults to
    /// `index_html.h` in the parent of `source_dir`.
    pub(crate) output_path: PathBuf,
    pub(crate) minify: bool,
    /// Name of the generated C array, a valid C identifier
    pub(crate) constant_name: String,
}
