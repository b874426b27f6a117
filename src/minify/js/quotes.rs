//! Character-level string literal tracking for script text.
//!
//! `QuoteTracker` knows whether the scan is inside a `"..."`, `'...'` or
//! `` `...` `` literal. It is line-agnostic: callers decide whether to carry
//! it across lines or start a fresh one per line.

/// The three string delimiter kinds
pub const STRING_DELIMITERS: [char; 3] = ['"', '\'', '`'];

/// Line comment marker
pub const LINE_COMMENT: &str = "//";

/// Scanner state: which quote opened the current literal, and whether the
/// previous character was an unconsumed backslash inside it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteTracker {
    open: Option<char>,
    escape_pending: bool,
}

impl QuoteTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn in_string(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn open_quote(&self) -> Option<char> {
        self.open
    }

    /// Feed the next character
    ///
    /// Returns `true` if the character is part of a string literal, delimiters
    /// included.
    pub fn advance(&mut self, ch: char) -> bool {
        match self.open {
            None => {
                if STRING_DELIMITERS.contains(&ch) {
                    self.open = Some(ch);
                    true
                } else {
                    false
                }
            }
            Some(quote) => {
                if self.escape_pending {
                    self.escape_pending = false;
                } else if ch == '\\' {
                    self.escape_pending = true;
                } else if ch == quote {
                    self.open = None;
                }
                true
            }
        }
    }
}

/// Byte offset of the first `//` that is not inside a string literal
///
/// # Examples
///
/// ```
/// use webui_embed::minify::js::find_line_comment;
///
/// assert_eq!(find_line_comment(r#"x = "a//b"; // note"#), Some(12));
/// assert_eq!(find_line_comment(r#"x = "a//b";"#), None);
/// ```
#[must_use]
pub fn find_line_comment(line: &str) -> Option<usize> {
    let mut tracker = QuoteTracker::new();
    let mut chars = line.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !tracker.in_string() && ch == '/' && matches!(chars.peek(), Some((_, '/'))) {
            return Some(idx);
        }
        tracker.advance(ch);
    }

    None
}
