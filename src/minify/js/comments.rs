//! Line-level comment stripping for script text.
//!
//! `CommentStripper` is a two-state machine (`Normal`, `InBlockComment`)
//! driven one source line at a time. It wraps any iterator of lines and
//! yields one `ScriptLine` per input line, lazily. Lines swallowed by a block
//! comment come out empty so the caller can drop them.
//!
//! Line comments are located with the quote-aware scan in `quotes`; block
//! comment markers are matched textually.

use super::quotes::find_line_comment;

pub const BLOCK_COMMENT_START: &str = "/*";
pub const BLOCK_COMMENT_END: &str = "*/";

/// A line mentioning an `http`/`https` URL is never truncated at `//`
pub const PROTOCOL_MARKER: &str = "http";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Normal,
    InBlockComment,
}

/// One output line of the stripper
///
/// `seams` holds byte offsets into `text` where an inline `/* ... */` was cut
/// out and the text on either side now touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptLine {
    pub text: String,
    pub seams: Vec<usize>,
}

impl ScriptLine {
    fn mark_seam(&mut self) {
        let at = self.text.len();
        if self.seams.last() != Some(&at) {
            self.seams.push(at);
        }
    }
}

/// Comment-stripping iterator adaptor over source lines
pub struct CommentStripper<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    lines: I,
    state: ScanState,
}

impl<'a, I> CommentStripper<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            state: ScanState::Normal,
        }
    }

    /// State the next line will be scanned in
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    fn scan_normal(&mut self, line: &str) -> ScriptLine {
        let line = if line.contains(PROTOCOL_MARKER) {
            line
        } else {
            match find_line_comment(line) {
                Some(idx) => &line[..idx],
                None => line,
            }
        };

        let mut out = ScriptLine {
            text: String::with_capacity(line.len()),
            seams: Vec::new(),
        };
        let mut rest = line;

        while let Some(start) = rest.find(BLOCK_COMMENT_START) {
            out.text.push_str(&rest[..start]);
            let after = &rest[start + BLOCK_COMMENT_START.len()..];

            match after.find(BLOCK_COMMENT_END) {
                Some(end) => {
                    out.mark_seam();
                    rest = &after[end + BLOCK_COMMENT_END.len()..];
                }
                None => {
                    self.state = ScanState::InBlockComment;
                    return out;
                }
            }
        }

        out.text.push_str(rest);
        out
    }
}

impl<'a, I> Iterator for CommentStripper<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = ScriptLine;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;

        let scanned = match self.state {
            ScanState::Normal => self.scan_normal(line),
            ScanState::InBlockComment => match line.find(BLOCK_COMMENT_END) {
                Some(end) => {
                    self.state = ScanState::Normal;
                    self.scan_normal(&line[end + BLOCK_COMMENT_END.len()..])
                }
                None => ScriptLine::default(),
            },
        };

        Some(scanned)
    }
}
