use crate::domain::value_objects::{CredentialCategory, CATEGORIES};

/// Classify a raw credential description into one of the fixed categories.
///
/// Categories are tried in declaration order; the first one with any keyword
/// contained in the lower-cased text wins, unless one of the category's
/// exclusion substrings also appears (then the scan continues with the next
/// category). Returns `None` when nothing matches; the caller treats that
/// as "unscoreable, skip silently", not as an error.
pub fn classify(text: &str) -> Option<&'static CredentialCategory> {
    let haystack = text.to_lowercase();

    'categories: for category in CATEGORIES {
        if !category
            .keywords
            .iter()
            .any(|keyword| haystack.contains(keyword))
        {
            continue;
        }
        for blocked in category.excluded_if {
            if haystack.contains(blocked) {
                continue 'categories;
            }
        }
        return Some(category);
    }

    None
}
