//! Joining, whitespace collapsing and keyword re-spacing for script text.
//!
//! Comment removal and whitespace collapsing both glue text together. Every
//! place where that happened is remembered as a seam, and the final
//! re-spacing pass only looks at seams. A keyword fused onto an identifier at
//! a seam (`return/**/x` -> `returnx`) gets its space back, while identifiers
//! that merely start with a keyword (`returned`, `format`, `newValue`) are
//! never touched.

use super::comments::ScriptLine;
use super::quotes::QuoteTracker;

/// Keywords that must stay separated from a following identifier
pub const RESPACED_KEYWORDS: [&str; 15] = [
    "return",
    "const",
    "let",
    "var",
    "if",
    "else",
    "for",
    "while",
    "function",
    "async",
    "await",
    "new",
    "typeof",
    "instanceof",
    "throw",
];

/// Braces, parens, semicolon and comma
const STRUCTURAL_CHARS: [char; 6] = ['{', '}', '(', ')', ';', ','];

/// Operator characters that never need surrounding whitespace
const OPERATOR_CHARS: [char; 15] = [
    '=', ':', '?', '<', '>', '!', '+', '-', '*', '/', '&', '|', '^', '~', '%',
];

/// Script text plus the byte offsets where fragments were fused together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spliced {
    text: String,
    seams: Vec<usize>,
}

impl Spliced {
    /// Build from text and seam offsets
    ///
    /// Seams are sorted and deduplicated; offsets past the end or off a char
    /// boundary are dropped.
    #[must_use]
    pub fn new(text: impl Into<String>, mut seams: Vec<usize>) -> Self {
        let text = text.into();
        seams.sort_unstable();
        seams.dedup();
        seams.retain(|&seam| seam <= text.len() && text.is_char_boundary(seam));
        Self { text, seams }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn seams(&self) -> &[usize] {
        &self.seams
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    fn mark_seam(&mut self) {
        let at = self.text.len();
        if self.seams.last() != Some(&at) {
            self.seams.push(at);
        }
    }
}

/// Trim each line, drop empty ones and join the rest with a single space
///
/// Seams that fall on a line's trimmed edges are discarded; the others are
/// shifted into the joined text.
pub fn join_lines(lines: impl IntoIterator<Item = ScriptLine>) -> Spliced {
    let mut joined = Spliced::default();

    for line in lines {
        let trimmed = line.text.trim();
        if trimmed.is_empty() {
            continue;
        }

        let lead = line.text.len() - line.text.trim_start().len();
        if !joined.text.is_empty() {
            joined.text.push(' ');
        }
        let base = joined.text.len();
        joined.text.push_str(trimmed);

        for seam in line.seams {
            if seam > lead && seam - lead < trimmed.len() {
                joined.seams.push(base + seam - lead);
            }
        }
    }

    joined
}

fn is_tight(ch: char) -> bool {
    STRUCTURAL_CHARS.contains(&ch) || OPERATOR_CHARS.contains(&ch)
}

/// Remove whitespace next to punctuation and operators, shrink the rest
///
/// Outside string literals, a whitespace run is dropped when the character
/// before or after it is structural punctuation or an operator, and becomes a
/// single space otherwise. String literal contents are copied verbatim.
#[must_use]
pub fn collapse_whitespace(input: &Spliced) -> Spliced {
    let mut out = Spliced {
        text: String::with_capacity(input.text.len()),
        seams: Vec::with_capacity(input.seams.len()),
    };
    let mut seams = input.seams.iter().copied().peekable();
    let mut tracker = QuoteTracker::new();
    let mut chars = input.text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        while seams.next_if(|&seam| seam <= idx).is_some() {
            out.mark_seam();
        }

        if !tracker.in_string() && ch.is_whitespace() {
            while chars.next_if(|&(_, next)| next.is_whitespace()).is_some() {}

            let before = out.text.chars().next_back();
            let after = chars.peek().map(|&(_, next)| next);
            if before.is_none_or(is_tight) || after.is_none_or(is_tight) {
                out.mark_seam();
            } else {
                out.text.push(' ');
            }
            continue;
        }

        tracker.advance(ch);
        out.text.push(ch);
    }

    if seams.next().is_some() {
        out.mark_seam();
    }

    out
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// True if the seam separates a whole keyword from an identifier character
fn fused_keyword_at(text: &str, seam: usize) -> bool {
    let (head, tail) = text.split_at(seam);
    if !tail.chars().next().is_some_and(is_identifier_char) {
        return false;
    }

    RESPACED_KEYWORDS.iter().any(|keyword| {
        head.strip_suffix(keyword)
            .is_some_and(|rest| !rest.chars().next_back().is_some_and(is_identifier_char))
    })
}

/// Put exactly one space back between a keyword and the identifier fused to it
///
/// Must run after every other compaction step.
///
/// # Examples
///
/// ```
/// use webui_embed::minify::js::{respace_keywords, Spliced};
///
/// let fused = Spliced::new("returnx", vec![6]);
/// assert_eq!(respace_keywords(&fused), "return x");
///
/// let plain = Spliced::new("returned", vec![]);
/// assert_eq!(respace_keywords(&plain), "returned");
/// ```
#[must_use]
pub fn respace_keywords(input: &Spliced) -> String {
    let text = input.text();
    let mut out = String::with_capacity(text.len() + input.seams.len());
    let mut copied = 0;

    for &seam in input.seams() {
        if fused_keyword_at(text, seam) {
            out.push_str(&text[copied..seam]);
            out.push(' ');
            copied = seam;
        }
    }

    out.push_str(&text[copied..]);
    out
}
