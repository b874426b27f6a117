//! Source and in-progress document types for the build pipeline

use serde::Serialize;
use std::path::Path;

use crate::errors::{BuildError, BuildResult};

/// Which of the three web dialects a piece of text is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Markup,
    Style,
    Script,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Markup => write!(f, "Markup"),
            Dialect::Style => write!(f, "Stylesheet"),
            Dialect::Script => write!(f, "Script"),
        }
    }
}

/// Raw text read from disk, tagged with its dialect
///
/// There is no mutating API: transforms always produce new strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    dialect: Dialect,
    text: String,
}

impl SourceText {
    #[must_use]
    pub fn new(dialect: Dialect, text: impl Into<String>) -> Self {
        Self {
            dialect,
            text: text.into(),
        }
    }

    /// Read a UTF-8 file from disk
    ///
    /// # Errors
    ///
    /// Returns `BuildError::Io` if the file cannot be read or is not valid UTF-8.
    pub fn read(dialect: Dialect, path: &Path) -> BuildResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
        Ok(Self { dialect, text })
    }

    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Pipeline stages, in the only order they may be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Stage {
    Loaded,
    Inlined,
    Minified,
    Escaped,
}

/// The markup being built, owned by a single pipeline run
#[derive(Debug)]
pub struct PipelineDocument {
    html: String,
    stages: Vec<Stage>,
}

impl PipelineDocument {
    /// Start a document from the loaded main markup
    #[must_use]
    pub fn load(source: SourceText) -> Self {
        Self {
            html: source.text,
            stages: vec![Stage::Loaded],
        }
    }

    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    #[must_use]
    pub fn last_stage(&self) -> Stage {
        // load() always pushes Loaded
        self.stages.last().copied().unwrap_or(Stage::Loaded)
    }

    /// Replace the document text with the output of `stage`
    ///
    /// Stages may only move forward; applying one out of order is a
    /// programming error in the pipeline and is caught in debug builds.
    pub fn apply(&mut self, stage: Stage, transform: impl FnOnce(&str) -> String) {
        debug_assert!(
            stage > self.last_stage(),
            "stage {stage:?} applied after {:?}",
            self.last_stage()
        );
        let before = self.html.len();
        self.html = transform(&self.html);
        log::debug!("{stage:?}: {before} -> {} bytes", self.html.len());
        self.stages.push(stage);
    }

    /// Consume the document, yielding the final text
    #[must_use]
    pub fn into_html(self) -> String {
        self.html
    }
}
