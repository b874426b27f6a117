//! Builder methods available for all states
//!
//! Optional settings can be given before or after the required asset
//! directory.

use std::path::PathBuf;

use super::builder::BuildConfigBuilder;

impl<State> BuildConfigBuilder<State> {
    /// Main markup document name, relative to the asset directory
    #[must_use]
    pub fn entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = entry.into();
        self
    }

    /// Write the header here instead of next to the asset directory
    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Enable or disable all minification (markup and embedded resources)
    #[must_use]
    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Name of the generated C array
    ///
    /// Validated by `build()`.
    ///
    /// # Example
    /// ```rust
    /// # use webui_embed::config::BuildConfig;
    /// let config = BuildConfig::builder()
    ///     .source_dir("data")
    ///     .constant_name("setup_page")
    ///     .build()?;
    /// assert_eq!(config.constant_name(), "setup_page");
    /// # Ok::<(), webui_embed::BuildError>(())
    /// ```
    #[must_use]
    pub fn constant_name(mut self, name: impl Into<String>) -> Self {
        self.constant_name = name.into();
        self
    }
}
