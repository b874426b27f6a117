//! Stylesheet compaction.
//!
//! Regex-driven and unaware of quoted values: whitespace inside a quoted
//! `content: "a : b"` string is compacted like any other whitespace.

use regex::Regex;
use std::sync::LazyLock;

static CSS_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)/\*.*?\*/").expect("CSS_COMMENT_RE: hardcoded regex is valid")
});

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN_RE: hardcoded regex is valid"));

/// Whitespace around braces, colon, semicolon, comma and the `>` `~` `+` combinators
static PUNCTUATION_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*([{};:,>~+])\s*").expect("PUNCTUATION_SPACE_RE: hardcoded regex is valid")
});

static TRAILING_SEMICOLON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r";\s*\}").expect("TRAILING_SEMICOLON_RE: hardcoded regex is valid")
});

/// Minify stylesheet text
///
/// Applied in order:
/// 1. Remove `/* ... */` comments (they may span lines)
/// 2. Collapse whitespace runs to a single space
/// 3. Drop whitespace around `{ } ; : , > ~ +`
/// 4. Drop a `;` directly before `}`
/// 5. Trim
///
/// # Examples
///
/// ```
/// use webui_embed::minify::minify_css;
///
/// let css = "/* theme */\nbody {\n  color : red ;\n}\n";
/// assert_eq!(minify_css(css), "body{color:red}");
/// ```
#[must_use]
pub fn minify_css(css: &str) -> String {
    let css = CSS_COMMENT_RE.replace_all(css, "");
    let css = WHITESPACE_RUN_RE.replace_all(&css, " ");
    let css = PUNCTUATION_SPACE_RE.replace_all(&css, "$1");
    let css = TRAILING_SEMICOLON_RE.replace_all(&css, "}");
    css.trim().to_string()
}
