//! # Text Extraction
//!
//! Pure helpers that turn arbitrary response text into ordered numeric
//! sequences. Tokens are matched left to right at word boundaries and
//! duplicates are preserved.
//!
//! A token suffixed with `%` (optionally after whitespace) is a percentage:
//! it appears in [`extract_percentages`] and is excluded from
//! [`extract_numbers`], so the two sequences are disjoint.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").expect("valid number pattern"));

static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d+(?:\.\d+)?)\s*%").expect("valid percent pattern"));

/// True when the text following byte offset `end` is optional whitespace
/// and then a percent sign.
fn followed_by_percent(text: &str, end: usize) -> bool {
    text[end..].trim_start().starts_with('%')
}

/// Extract every integer-or-decimal token, in occurrence order, excluding
/// percentage tokens.
///
/// # Examples
/// ```
/// use lax_core::extract::extract_numbers;
///
/// assert_eq!(extract_numbers("scored 70 goals on 115 shots"), vec![70.0, 115.0]);
/// assert_eq!(extract_numbers("shot 60.9% from the field"), Vec::<f64>::new());
/// assert_eq!(extract_numbers("no numbers here"), Vec::<f64>::new());
/// ```
pub fn extract_numbers(text: &str) -> Vec<f64> {
    NUMBER_RE
        .find_iter(text)
        .filter(|m| !followed_by_percent(text, m.end()))
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// Extract the numeric part of every `%`-suffixed token, in occurrence
/// order. Handles both `"60.9%"` and `"60.9 %"`.
pub fn extract_percentages(text: &str) -> Vec<f64> {
    PERCENT_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}
