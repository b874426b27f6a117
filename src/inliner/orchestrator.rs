//! Resource inlining orchestration
//!
//! Stylesheets are embedded first, then scripts are located and embedded in
//! the already rewritten markup. A reference whose file does not exist is left
//! byte-identical and reported, never treated as fatal.

use std::path::Path;

use super::references::{locate_references, relative_asset_path};
use super::types::{InliningResult, ResolutionState, ResourceReference};
use crate::errors::BuildResult;
use crate::minify::{minify_css, minify_js};
use crate::pipeline::{Dialect, SourceText};

/// Dialects in the order their references are resolved
pub const INLINE_ORDER: [Dialect; 2] = [Dialect::Style, Dialect::Script];

/// Replace every stylesheet and script reference with the referenced content
///
/// Paths are resolved against `asset_root`. With `minify` set, embedded
/// content is run through the matching minifier first.
///
/// # Errors
///
/// Returns `BuildError::Io` when a referenced file exists but cannot be read.
/// Missing files are recorded as `ResolutionState::Missing` instead.
pub fn inline_resources(
    html: &str,
    asset_root: &Path,
    minify: bool,
) -> BuildResult<InliningResult> {
    let mut html = html.to_string();
    let mut references = Vec::new();

    for dialect in INLINE_ORDER {
        let (rewritten, found) = inline_dialect(&html, asset_root, dialect, minify)?;
        html = rewritten;
        references.extend(found);
    }

    Ok(InliningResult {
        html,
        references,
        asset_root: asset_root.to_path_buf(),
    })
}

fn inline_dialect(
    html: &str,
    asset_root: &Path,
    dialect: Dialect,
    minify: bool,
) -> BuildResult<(String, Vec<ResourceReference>)> {
    let mut references = locate_references(html, dialect);
    if references.is_empty() {
        return Ok((html.to_string(), references));
    }

    let mut out = String::with_capacity(html.len());
    let mut copied = 0;

    for reference in &mut references {
        out.push_str(&html[copied..reference.span.start]);
        let file = asset_root.join(relative_asset_path(&reference.path));

        if file.is_file() {
            log::info!("Inlining: {}", reference.path);
            let source = SourceText::read(dialect, &file)?;
            out.push_str(&embed(&source, minify));
            reference.state = ResolutionState::Resolved {
                source_bytes: source.len(),
            };
        } else {
            log::warn!("{dialect} not found: {}", file.display());
            out.push_str(&html[reference.span.clone()]);
            reference.state = ResolutionState::Missing;
        }

        copied = reference.span.end;
    }

    out.push_str(&html[copied..]);
    Ok((out, references))
}

/// Wrap source content in the element that embeds it
fn embed(source: &SourceText, minify: bool) -> String {
    match source.dialect() {
        Dialect::Style if minify => format!("<style>{}</style>", minify_css(source.text())),
        Dialect::Style => format!("<style>{}</style>", source.text()),
        Dialect::Script if minify => format!("<script>{}</script>", minify_js(source.text())),
        Dialect::Script => format!("<script>{}</script>", source.text()),
        Dialect::Markup => source.text().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn asset_root(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().expect("create temp dir");
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create asset subdir");
            }
            fs::write(path, content).expect("write asset");
        }
        dir
    }

    #[test]
    fn test_inlines_stylesheet_and_script() {
        let root = asset_root(&[
            ("style.css", "body {\n  margin: 0;\n}\n"),
            ("app.js", "// boot\nstart();\n"),
        ]);
        let html = r#"<head><link rel="stylesheet" href="style.css"></head><body><script src="app.js"></script></body>"#;

        let result = inline_resources(html, root.path(), true).expect("inline");
        assert_eq!(
            result.html,
            "<head><style>body{margin:0}</style></head><body><script>start();</script></body>"
        );
        assert_eq!(result.resolved().count(), 2);
        assert!(!result.has_missing());
        assert_eq!(result.inlined_source_bytes(), 22 + 17);
    }

    #[test]
    fn test_unminified_content_is_embedded_verbatim() {
        let css = "a { color: red; }\n";
        let root = asset_root(&[("style.css", css)]);
        let html = r#"<link href="style.css" rel="stylesheet">"#;

        let result = inline_resources(html, root.path(), false).expect("inline");
        assert_eq!(result.html, format!("<style>{css}</style>"));
    }

    #[test]
    fn test_missing_reference_is_left_in_place() {
        let root = asset_root(&[("app.js", "go();")]);
        let html = r#"<link rel="stylesheet" href="missing.css"><script src="app.js"></script>"#;

        let result = inline_resources(html, root.path(), true).expect("inline");
        assert_eq!(
            result.html,
            r#"<link rel="stylesheet" href="missing.css"><script>go();</script>"#
        );
        assert!(result.has_missing());
        let missing: Vec<_> = result.missing().map(|r| r.path.as_str()).collect();
        assert_eq!(missing, vec!["missing.css"]);
        assert_eq!(result.warnings().len(), 1);
        assert!(!result.warnings()[0].is_fatal());
    }

    #[test]
    fn test_site_root_and_nested_paths_resolve() {
        let root = asset_root(&[("css/a.css", "p{}"), ("js/b.js", "b();")]);
        let html = r#"<link href="/css/a.css"><script src="./js/b.js"></script>"#;

        let result = inline_resources(html, root.path(), true).expect("inline");
        assert_eq!(result.html, "<style>p{}</style><script>b();</script>");
    }

    #[test]
    fn test_references_are_recorded_in_resolution_order() {
        let root = asset_root(&[("a.css", ""), ("b.js", ""), ("c.css", "")]);
        let html = r#"<script src="b.js"></script><link href="a.css"><link href="c.css">"#;

        let result = inline_resources(html, root.path(), true).expect("inline");
        let order: Vec<_> = result.references.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(order, vec!["a.css", "c.css", "b.js"]);
    }

    #[test]
    fn test_document_without_references_is_unchanged() {
        let root = asset_root(&[]);
        let html = "<p>plain</p>";
        let result = inline_resources(html, root.path(), true).expect("inline");
        assert_eq!(result.html, html);
        assert!(result.references.is_empty());
    }
}
