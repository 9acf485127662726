// src/schema/numeric.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional sign, ASCII digits with an optional fraction (or a bare
/// fraction), optional exponent.
static NUMERIC_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("numeric literal pattern should compile")
});

/// True when `cell` is a plain decimal or scientific literal that fits in
/// a finite `f64`.
///
/// Surrounding whitespace is ignored. Empty cells, `Infinity`, `NaN`,
/// hex literals, thousands separators, non-ASCII digits and literals that
/// overflow (`1e400`) are never numeric.
pub fn is_numeric(cell: &str) -> bool {
    parse_number(cell).is_some()
}

/// The value of a numeric cell, or `None` when [`is_numeric`] is false.
pub fn parse_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if !NUMERIC_LITERAL.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
