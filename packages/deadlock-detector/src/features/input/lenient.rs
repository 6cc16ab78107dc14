//! Lenient numeric parsing
//!
//! Mirrors what a numeric form field gives you: the leading integer of the
//! text, or 0 when there is none. Never fails.

/// Parse the leading integer of `raw`
///
/// - surrounding whitespace is ignored
/// - an optional `+`/`-` sign is honoured
/// - anything after the leading digits is ignored ("12abc" → 12, "1.9" → 1)
/// - empty input or no leading digits → 0
/// - values beyond `i64` saturate
pub fn parse_lenient(raw: &str) -> i64 {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0;
    }

    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Split one row of text into cells
///
/// Cells are separated by commas and/or whitespace; runs of separators count once.
pub fn split_cells(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split matrix text into rows of raw cells
///
/// Rows are separated by `;` or newlines; blank rows are dropped.
pub fn split_rows(text: &str) -> Vec<Vec<String>> {
    text.split(|c: char| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(split_cells)
        .collect()
}

/// Parse a vector such as `"0, 0, 1"` or `"0 0 1"`
pub fn parse_vector_text(text: &str) -> Vec<i64> {
    split_cells(text).iter().map(|cell| parse_lenient(cell)).collect()
}

/// Parse a matrix such as `"1 0 1; 0 1 0"`
pub fn parse_matrix_text(text: &str) -> Vec<Vec<i64>> {
    split_rows(text)
        .iter()
        .map(|row| row.iter().map(|cell| parse_lenient(cell)).collect())
        .collect()
}
