//! Functions for replacing typographic quotation marks with straight ones.

use crate::unicode::straighten;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

/// Replace every curly double quote in the text with a straight single quote.
///
/// Both U+201C (left) and U+201D (right) map to the apostrophe. Text without
/// any curly quotes is returned borrowed and unmodified.
///
/// # Examples
///
/// ```rust
/// # use quotefix::text::straighten_quotes;
/// let fixed = straighten_quotes("She said \u{201c}Hello\u{201d} to me.");
/// assert_eq!("She said 'Hello' to me.", fixed);
/// ```
pub fn straighten_quotes(text: &str) -> Cow<str> {
    lazy_static! {
        static ref CURLY: Regex = Regex::new("[\u{201c}\u{201d}]").unwrap();
    }
    if !CURLY.is_match(text) {
        return text.into();
    }
    text.chars()
        .map(|c| straighten(c).unwrap_or(c))
        .collect::<String>()
        .into()
}
