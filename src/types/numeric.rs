//! Numeric text parsing with ECMAScript `Number(string)` semantics.
//!
//! Notion stores number columns as text, and color keys arrive as strings
//! that may or may not look numeric. Both need the exact coercion rules the
//! blog's content layer has always applied: surrounding whitespace ignored,
//! the empty string is zero, `0x`/`0o`/`0b` integer literals and
//! `Infinity` are accepted, everything else that is not a plain decimal
//! literal is not a number.

/// Parses `text` as a number. Returns `None` where ECMAScript yields `NaN`.
pub fn parse_numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return Some(0.0);
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // Rust accepts spellings ECMAScript does not ("inf", "NaN", "infinity").
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }

    trimmed.parse::<f64>().ok()
}

/// Returns `Some(result)` when `text` carries a radix prefix, `None` otherwise.
fn parse_radix_literal(text: &str) -> Option<Option<f64>> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(None);
    }

    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * f64::from(radix) + f64::from(d),
            None => return Some(None),
        }
    }
    Some(Some(value))
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
