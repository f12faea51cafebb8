//! Numeric parsing and formatting shared by the converter and the
//! settings storage.

/// Parses the longest decimal prefix of `text`, skipping leading
/// whitespace. Returns NaN when no digits are found.
///
/// Trailing garbage is ignored ("12abc" parses as 12), matching the
/// permissive behavior quantity and ratio inputs rely on.
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut saw_digit = end > int_start;

    if bytes.get(end) == Some(&b'.') {
        end += 1;
        let frac_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        saw_digit |= end > frac_start;
    }

    if !saw_digit {
        return f64::NAN;
    }

    // Optional exponent; only consumed when it carries digits.
    let mut num_end = end;
    if matches!(bytes.get(end), Some(&b'e') | Some(&b'E')) {
        let mut e = end + 1;
        if matches!(bytes.get(e), Some(&b'+') | Some(&b'-')) {
            e += 1;
        }
        let exp_start = e;
        while e < bytes.len() && bytes[e].is_ascii_digit() {
            e += 1;
        }
        if e > exp_start {
            num_end = e;
        }
    }

    s[..num_end].parse().unwrap_or(f64::NAN)
}

/// Formats a derived quantity with exactly 4 decimal places.
///
/// Infinite and NaN values render as text ("inf", "NaN"); division by a
/// zero ratio is deliberately not guarded upstream.
pub fn fixed4(value: f64) -> String {
    format!("{value:.4}")
}

/// Plain (non-padded) rendering of a ratio, used when seeding the
/// settings fields and when writing to storage.
pub fn display_number(value: f64) -> String {
    format!("{value}")
}
