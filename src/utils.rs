//! Common utility functions shared across the codebase.

use glob::Pattern;

use crate::catalog::{Segment, Template};

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use locat::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("Здравей"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("$100"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// True if the literal parts of a template (placeholders excluded) contain
/// a letter. `"{count}"` has none; `"{count} photo"` has.
pub fn has_literal_text(template: &Template) -> bool {
    template.segments().iter().any(|segment| match segment {
        Segment::Literal(text) => contains_alphabetic(text),
        Segment::Placeholder(_) => false,
    })
}

pub fn matches_any(key: &str, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|p| p.matches(key))
}
