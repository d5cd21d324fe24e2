use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

/// NFKC-normalize, lowercase and trim a free-text term.
///
/// Resume extraction output mixes full-width characters, stray whitespace
/// and inconsistent casing; all comparisons in the engine run on this form.
pub fn nfkc_lower_trim(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_lowercase()
}

/// Split a comma-separated skill field into trimmed, non-empty names.
pub fn split_skill_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop blank entries and case-insensitive duplicates, keeping the first
/// occurrence (trimmed) in original order.
pub fn dedupe_terms(terms: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    for term in terms {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(nfkc_lower_trim(trimmed)) {
            result.push(trimmed.to_string());
        }
    }

    result
}

/// Normalize a term list for matching: each entry NFKC-lowercased and
/// trimmed, blanks dropped, duplicates collapsed, order preserved.
pub fn normalize_terms(terms: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    for term in terms {
        let normalized = nfkc_lower_trim(term);
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized.clone()) {
            result.push(normalized);
        }
    }

    result
}
