//! Type definitions for resource inlining

use serde::Serialize;
use std::ops::Range;
use std::path::PathBuf;

use crate::errors::BuildError;
use crate::pipeline::Dialect;

/// Resolution progress of a single reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum ResolutionState {
    /// Located in the markup, not looked up yet
    Unresolved,
    /// File found and embedded; `source_bytes` is its size before minification
    Resolved { source_bytes: usize },
    /// File not found; the reference markup was left in place
    Missing,
}

/// A stylesheet or script reference located in the markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceReference {
    pub dialect: Dialect,
    /// Path exactly as written in the `href`/`src` attribute
    pub path: String,
    /// Byte span of the whole reference markup in the text it was found in
    #[serde(skip)]
    pub span: Range<usize>,
    pub state: ResolutionState,
}

impl ResourceReference {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self.state, ResolutionState::Resolved { .. })
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.state == ResolutionState::Missing
    }
}

/// Result of an inlining pass with per-reference outcomes
#[derive(Debug, Clone)]
pub struct InliningResult {
    pub html: String,
    pub references: Vec<ResourceReference>,
    /// Asset root the references were resolved against
    pub asset_root: PathBuf,
}

impl InliningResult {
    /// References that were embedded
    pub fn resolved(&self) -> impl Iterator<Item = &ResourceReference> {
        self.references.iter().filter(|r| r.is_resolved())
    }

    /// References whose file did not exist
    pub fn missing(&self) -> impl Iterator<Item = &ResourceReference> {
        self.references.iter().filter(|r| r.is_missing())
    }

    /// Check if any reference could not be resolved
    #[must_use]
    pub fn has_missing(&self) -> bool {
        self.missing().next().is_some()
    }

    /// Total size of the embedded files before minification
    #[must_use]
    pub fn inlined_source_bytes(&self) -> usize {
        self.references
            .iter()
            .map(|r| match r.state {
                ResolutionState::Resolved { source_bytes } => source_bytes,
                _ => 0,
            })
            .sum()
    }

    /// One recoverable `MissingSubResource` per missing reference
    #[must_use]
    pub fn warnings(&self) -> Vec<BuildError> {
        self.missing()
            .map(|r| BuildError::MissingSubResource {
                dialect: r.dialect,
                path: self.asset_root.join(super::references::relative_asset_path(&r.path)),
            })
            .collect()
    }
}
