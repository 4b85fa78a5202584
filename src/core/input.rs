//! Lenient numeric input parsing
//!
//! The filter engine and identity resolution both receive free text from
//! the user-input surface (a selector value or a typed amount). That text
//! is parsed with deliberately forgiving rules: leading whitespace is
//! tolerated, an optional sign is accepted, and trailing garbage after the
//! digits is truncated rather than rejected. `"60.5"` therefore parses to
//! `60` (the fractional part is truncated before any comparison) and an
//! empty string parses to nothing at all.
//!
//! Malformed text is never an error here; callers map `None` to their own
//! fallback (the unfiltered view, or a cleared selection).

/// Parse the leading base-10 integer from user input
///
/// Returns `None` when the text contains no digits after the optional
/// whitespace and sign, or when the digit run overflows an `i64`.
///
/// # Examples
///
/// ```
/// use spendview::core::input::parse_leading_int;
///
/// assert_eq!(parse_leading_int("42"), Some(42));
/// assert_eq!(parse_leading_int("  -7"), Some(-7));
/// assert_eq!(parse_leading_int("60.5"), Some(60));
/// assert_eq!(parse_leading_int(""), None);
/// assert_eq!(parse_leading_int("All"), None);
/// ```
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();

    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
