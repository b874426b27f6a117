//! C/C++ header rendering

use chrono::NaiveDateTime;

use crate::utils::{BUILD_TIMESTAMP_FORMAT, HEADER_TITLE, REBUILD_HINT, format_thousands};

/// Render the header that embeds `payload` as a `PROGMEM` raw string constant
///
/// `payload` must already be delimiter-escaped. The size in the banner is the
/// payload length in bytes.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use webui_embed::artifact::render_header;
///
/// let built_at = NaiveDate::from_ymd_opt(2024, 5, 1)
///     .and_then(|d| d.and_hms_opt(8, 30, 0))
///     .expect("valid timestamp");
/// let header = render_header("<p>hi</p>", "index_html", built_at);
/// assert!(header.starts_with("#pragma once\n"));
/// assert!(header.ends_with("R\"rawliteral(<p>hi</p>)rawliteral\";\n"));
/// ```
#[must_use]
pub fn render_header(payload: &str, constant_name: &str, built_at: NaiveDateTime) -> String {
    let built = built_at.format(BUILD_TIMESTAMP_FORMAT);
    let size = format_thousands(payload.len() as i128);

    format!(
        "#pragma once\n\
         \n\
         // {HEADER_TITLE} - Auto-generated\n\
         // Built: {built} | Size: {size} bytes\n\
         // {REBUILD_HINT}\n\
         \n\
         const char {constant_name}[] PROGMEM = R\"rawliteral({payload})rawliteral\";\n"
    )
}
