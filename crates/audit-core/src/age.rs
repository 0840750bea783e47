//! Age cell parsing and bucketing.
//!
//! Age cells are parsed leniently: optional leading whitespace and sign, then
//! the longest run of ASCII digits (`"34"`, `"34 years"` and `"34.9"` all read
//! as 34). A cell with no leading digits does not parse.

/// Parses the leading integer of an age cell.
///
/// Returns `None` for cells without leading digits or whose digits overflow.
pub fn parse_age(cell: &str) -> Option<i64> {
    let trimmed = cell.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Age used for target matching: unparsable cells count as 0.
pub fn age_or_zero(cell: &str) -> i64 {
    parse_age(cell).unwrap_or(0)
}

/// Decade bucket label, e.g. `34 -> "30-39"`.
///
/// Bounds are computed in `i128` so the decades at the ends of the `i64`
/// range keep their true labels.
pub fn age_bucket(age: i64) -> String {
    let low = i128::from(age).div_euclid(10) * 10;
    format!("{}-{}", low, low + 9)
}
