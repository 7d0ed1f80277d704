// Defensive numeric parsing for transaction fields
// Author: Gabriel Demetrios Lafis

/// Currency glyphs stripped before parsing a monetary value
const CURRENCY_GLYPHS: [char; 4] = ['£', '$', '€', '¥'];

/// Parse a monetary text value, contributing zero on failure
///
/// Whitespace and currency glyphs are stripped first. A single comma with
/// no period is read as a decimal comma; any other comma is a thousands
/// separator and is removed. The cleaned text must be digits with at most
/// one period, so negative or exponent forms also contribute zero.
pub fn parse_money(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !CURRENCY_GLYPHS.contains(c))
        .collect();

    let cleaned = if cleaned.matches(',').count() == 1 && !cleaned.contains('.') {
        cleaned.replace(',', ".")
    } else {
        cleaned.replace(',', "")
    };

    if !is_plain_decimal(&cleaned) {
        return 0.0;
    }

    cleaned.parse().unwrap_or(0.0)
}

/// Check that text is digits with at most one decimal point
fn is_plain_decimal(text: &str) -> bool {
    let mut digits = false;
    let mut points = 0;

    for c in text.chars() {
        match c {
            '0'..='9' => digits = true,
            '.' => points += 1,
            _ => return false,
        }
    }

    digits && points <= 1
}

/// Parse a quantity as an integer, contributing zero when empty or malformed
pub fn parse_quantity(raw: &str) -> i64 {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return 0;
    }

    trimmed.parse().unwrap_or(0)
}

/// Parse a satisfaction score from non-empty text
///
/// Empty or malformed text yields `None`, which excludes the record from
/// the satisfaction numerator only; the average's denominator stays the
/// group's full transaction count.
pub fn parse_satisfaction(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse().ok()
}

/// Round a value to 2 decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
