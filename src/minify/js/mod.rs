//! Script compaction.
//!
//! A best-effort, line-oriented minifier: no tokenizer, no AST. The work is
//! split into composable pieces:
//!
//! 1. `CommentStripper` walks the source lines with a block-comment state
//!    machine and cuts line comments found by the quote-aware
//!    `find_line_comment` scan.
//! 2. `join_lines` trims the survivors and joins them into one line.
//! 3. `collapse_whitespace` drops whitespace around punctuation and operators.
//! 4. `respace_keywords` repairs keywords fused onto identifiers.
//!
//! Known gaps: regex literals are not recognized, statements relying on
//! automatic semicolon insertion across lines are joined as-is, and a line
//! mentioning `http` keeps its `//` comment.

mod comments;
mod compaction;
mod quotes;

pub use comments::{
    BLOCK_COMMENT_END, BLOCK_COMMENT_START, CommentStripper, PROTOCOL_MARKER, ScanState,
    ScriptLine,
};
pub use compaction::{RESPACED_KEYWORDS, Spliced, collapse_whitespace, join_lines, respace_keywords};
pub use quotes::{LINE_COMMENT, QuoteTracker, STRING_DELIMITERS, find_line_comment};

/// Minify script text into a single line
///
/// # Examples
///
/// ```
/// use webui_embed::minify::minify_js;
///
/// let js = "// helper\nfunction add(a, b) {\n    return a + b; /* sum */\n}\n";
/// assert_eq!(minify_js(js), "function add(a,b){return a+b;}");
/// ```
#[must_use]
pub fn minify_js(js: &str) -> String {
    let joined = join_lines(CommentStripper::new(js.lines()));
    let collapsed = collapse_whitespace(&joined);
    respace_keywords(&collapsed)
}
