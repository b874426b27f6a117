//! Number formatting helpers for human-readable output

/// Format an integer with `,` as the thousands separator
///
/// # Examples
/// ```
/// # use webui_embed::utils::string_utils::format_thousands;
/// assert_eq!(format_thousands(0), "0");
/// assert_eq!(format_thousands(999), "999");
/// assert_eq!(format_thousands(1_234_567), "1,234,567");
/// assert_eq!(format_thousands(-48_213), "-48,213");
/// ```
#[must_use]
pub fn format_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Percentage of `part` in `whole`, 0.0 when `whole` is zero
#[must_use]
pub fn percent_of(part: i64, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = part as f64 / whole as f64;
    ratio * 100.0
}
