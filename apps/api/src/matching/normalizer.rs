//! Term normalization: lower-case, trim, collapse whitespace, drop empties.

use std::collections::BTreeSet;

/// Normalizes a single term. Returns `None` when nothing but whitespace remains.
pub fn normalize_term(term: &str) -> Option<String> {
    let collapsed = normalize_text(term);
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Lower-cases free text and collapses every whitespace run to a single space.
/// Used for experience descriptions and tone input before substring checks.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes a collection of terms into a canonical set.
pub fn normalize<I, S>(terms: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .filter_map(|t| normalize_term(t.as_ref()))
        .collect()
}

/// Like [`normalize`], but keeps first-occurrence order. Needed wherever listing
/// order is significant (gap priorities).
pub fn normalize_ordered<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = BTreeSet::new();
    let mut ordered = Vec::new();
    for term in terms {
        if let Some(normalized) = normalize_term(term.as_ref()) {
            if seen.insert(normalized.clone()) {
                ordered.push(normalized);
            }
        }
    }
    ordered
}

/// Normalizes experience descriptions for substring checks.
pub fn normalize_descriptions<'a, I>(descriptions: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    descriptions
        .into_iter()
        .map(normalize_text)
        .filter(|d| !d.is_empty())
        .collect()
}
