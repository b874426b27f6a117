//! Locating stylesheet and script references in markup
//!
//! References are recognized textually, the same way for every document:
//! - `<link ... href="x.css" ...>` for stylesheets
//! - `<script ... src="x.js" ...></script>` (empty body) for scripts
//!
//! Matching is case-insensitive and accepts single or double quotes.

use regex::Regex;
use std::sync::LazyLock;

use super::types::{ResolutionState, ResourceReference};
use crate::pipeline::Dialect;

/// Captures: (1) the referenced `.css` path
static STYLESHEET_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link\s+[^>]*href=["']([^"']+\.css)["'][^>]*>"#)
        .expect("STYLESHEET_REF_RE: hardcoded regex is valid")
});

/// Captures: (1) the referenced `.js` path
static SCRIPT_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<script\s+[^>]*src=["']([^"']+\.js)["'][^>]*>\s*</script>"#)
        .expect("SCRIPT_REF_RE: hardcoded regex is valid")
});

fn pattern_for(dialect: Dialect) -> Option<&'static Regex> {
    match dialect {
        Dialect::Style => Some(&*STYLESHEET_REF_RE),
        Dialect::Script => Some(&*SCRIPT_REF_RE),
        Dialect::Markup => None,
    }
}

/// Find every reference of one dialect, in document order
///
/// Markup has no reference pattern, so `Dialect::Markup` always yields an
/// empty list.
#[must_use]
pub fn locate_references(html: &str, dialect: Dialect) -> Vec<ResourceReference> {
    let Some(pattern) = pattern_for(dialect) else {
        return Vec::new();
    };

    pattern
        .captures_iter(html)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let path = caps.get(1)?;
            Some(ResourceReference {
                dialect,
                path: path.as_str().to_string(),
                span: whole.range(),
                state: ResolutionState::Unresolved,
            })
        })
        .collect()
}

/// Referenced path relative to the asset root
///
/// Site-root (`/app.js`) and explicit current-dir (`./app.js`) prefixes are
/// stripped so every reference resolves inside the asset root.
#[must_use]
pub fn relative_asset_path(path: &str) -> &str {
    let mut path = path;
    loop {
        if let Some(rest) = path.strip_prefix("./") {
            path = rest;
        } else if let Some(rest) = path.strip_prefix('/') {
            path = rest;
        } else {
            return path;
        }
    }
}
