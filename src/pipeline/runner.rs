//! The build pipeline: load, inline, minify, escape

use crate::config::BuildConfig;
use crate::errors::{BuildError, BuildResult};
use crate::inliner::{InliningResult, inline_resources};
use crate::minify::minify_html;

use super::document::{Dialect, PipelineDocument, SourceText, Stage};
use super::escape::escape_raw_literal;

/// Result of a pipeline run, ready to be rendered into a header
#[derive(Debug, Clone)]
pub struct BuildOutput {
    /// Escaped, optionally minified, self-contained markup
    pub payload: String,
    pub inlining: InliningResult,
    /// Main document plus every embedded file, before any transform
    pub original_bytes: usize,
}

/// One build of one asset directory
///
/// Holds no state between runs; `run` can be called repeatedly and re-reads
/// everything from disk each time.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    config: &'a BuildConfig,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub fn new(config: &'a BuildConfig) -> Self {
        Self { config }
    }

    /// Run every stage in order
    ///
    /// # Errors
    ///
    /// - `BuildError::MissingMainInput` if the main document does not exist;
    ///   nothing is transformed in that case
    /// - `BuildError::Io` if an existing file cannot be read
    ///
    /// Missing stylesheets and scripts are not errors; see
    /// `InliningResult::warnings`.
    pub fn run(&self) -> BuildResult<BuildOutput> {
        let entry_path = self.config.entry_path();
        if !entry_path.is_file() {
            return Err(BuildError::MissingMainInput { path: entry_path });
        }

        log::info!("Loading: {}", entry_path.display());
        let main = SourceText::read(Dialect::Markup, &entry_path)?;
        let main_bytes = main.len();
        let mut document = PipelineDocument::load(main);

        let inlining = inline_resources(document.html(), self.config.source_dir(), self.config.minify())?;
        let inlined_html = inlining.html.clone();
        document.apply(Stage::Inlined, |_| inlined_html);

        if self.config.minify() {
            document.apply(Stage::Minified, minify_html);
        }
        document.apply(Stage::Escaped, escape_raw_literal);

        Ok(BuildOutput {
            original_bytes: main_bytes + inlining.inlined_source_bytes(),
            payload: document.into_html(),
            inlining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir, minify: bool) -> BuildConfig {
        BuildConfig::builder()
            .source_dir(dir.path())
            .minify(minify)
            .build()
            .expect("valid config")
    }

    #[test]
    fn test_missing_main_document() {
        let dir = TempDir::new().expect("temp dir");
        let err = Pipeline::new(&config_for(&dir, true)).run().expect_err("no index.html");
        match err {
            BuildError::MissingMainInput { path } => assert!(path.ends_with("index.html")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_escapes_terminator_from_embedded_script() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("index.html"), "<script src=\"app.js\"></script>").expect("seed");
        fs::write(dir.path().join("app.js"), "const s = \")rawliteral\";").expect("seed");

        let output = Pipeline::new(&config_for(&dir, true)).run().expect("run");
        assert_eq!(output.payload, "<script>const s=\")raw_literal\";</script>");
    }

    #[test]
    fn test_no_minify_keeps_markup_whitespace() {
        let dir = TempDir::new().expect("temp dir");
        let html = "<html>\n  <!-- note -->\n  <p>x</p>\n</html>\n";
        fs::write(dir.path().join("index.html"), html).expect("seed");

        let output = Pipeline::new(&config_for(&dir, false)).run().expect("run");
        assert_eq!(output.payload, html);
        assert_eq!(output.original_bytes, html.len());
    }

    #[test]
    fn test_original_bytes_counts_embedded_files() {
        let dir = TempDir::new().expect("temp dir");
        let html = "<link rel=\"stylesheet\" href=\"style.css\">";
        fs::write(dir.path().join("index.html"), html).expect("seed");
        fs::write(dir.path().join("style.css"), "p { }").expect("seed");

        let output = Pipeline::new(&config_for(&dir, true)).run().expect("run");
        assert_eq!(output.original_bytes, html.len() + 5);
        assert_eq!(output.payload, "<style>p{}</style>");
    }
}
