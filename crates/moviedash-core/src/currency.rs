//! Currency text cleaning.
//!
//! Budget and box-office columns hold free text such as `"$1,234,567"`,
//! `"$125000 (estimated)"` or `"Not Available"`. Cleaning keeps only ASCII
//! digits and the decimal point, then parses what is left.

/// Parses a free-text currency value into a number.
///
/// Every character other than `0-9` and `.` is dropped before parsing. An empty
/// remainder or an unparsable one (e.g. `"1.2.3"`) yields `None`; this never
/// fails loudly.
///
/// # Examples
///
/// ```
/// use moviedash_core::currency::clean_currency;
///
/// assert_eq!(clean_currency("$1,234,567"), Some(1_234_567.0));
/// assert_eq!(clean_currency("Not Available"), None);
/// ```
#[must_use]
pub fn clean_currency(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
