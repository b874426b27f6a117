//! Markup compaction.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Either a bare conditional opener (kept, scanning resumes after it) or a
/// whole comment
static HTML_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--\[if|<!--.*?-->").expect("HTML_COMMENT_RE: hardcoded regex is valid")
});

static INTER_TAG_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("INTER_TAG_SPACE_RE: hardcoded regex is valid"));

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN_RE: hardcoded regex is valid"));

/// Conditional comments (`<!--[if IE]> ... <![endif]-->`) carry markup and are kept
const CONDITIONAL_COMMENT_PREFIX: &str = "<!--[if";

/// Minify markup text
///
/// Removes comments (keeping conditional comments), deletes whitespace
/// between adjacent tags, collapses every other whitespace run to a single
/// space and trims the result. Content of `<pre>`, `<textarea>` and inline
/// scripts is not protected.
///
/// # Examples
///
/// ```
/// use webui_embed::minify::minify_html;
///
/// let html = "<div>\n  <!-- nav -->\n  <a href=\"/\">Home</a>\n</div>\n";
/// assert_eq!(minify_html(html), "<div><a href=\"/\">Home</a></div>");
/// ```
#[must_use]
pub fn minify_html(html: &str) -> String {
    let html = HTML_COMMENT_RE.replace_all(html, |caps: &Captures| {
        let comment = &caps[0];
        if comment.starts_with(CONDITIONAL_COMMENT_PREFIX) {
            comment.to_string()
        } else {
            String::new()
        }
    });
    let html = INTER_TAG_SPACE_RE.replace_all(&html, "><");
    let html = WHITESPACE_RUN_RE.replace_all(&html, " ");
    html.trim().to_string()
}
