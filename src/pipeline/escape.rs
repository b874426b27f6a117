//! Raw string delimiter escaping
//!
//! The payload is embedded as `R"rawliteral( ... )rawliteral"`. Any
//! occurrence of the closing sequence inside the payload would end the
//! literal early, so it is rewritten to a near-identical sequence that the
//! compiler does not treat as a terminator.

/// Closing sequence of the C++ raw string literal the payload lives in
pub const RAW_LITERAL_TERMINATOR: &str = ")rawliteral";

/// Replacement for `RAW_LITERAL_TERMINATOR`; never contains the terminator
pub const ESCAPED_TERMINATOR: &str = ")raw_literal";

/// Rewrite every raw literal terminator in `text`
///
/// # Examples
///
/// ```
/// use webui_embed::pipeline::escape_raw_literal;
///
/// let escaped = escape_raw_literal("x = f()rawliteral;");
/// assert_eq!(escaped, "x = f()raw_literal;");
/// ```
#[must_use]
pub fn escape_raw_literal(text: &str) -> String {
    text.replace(RAW_LITERAL_TERMINATOR, ESCAPED_TERMINATOR)
}
