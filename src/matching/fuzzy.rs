use strsim::normalized_damerau_levenshtein;

use crate::normalize::nfkc_lower_trim;

/// Similarity floor for skill-name comparison.
pub const SKILL_MATCH_THRESHOLD: f64 = 0.8;

/// Similarity floor for course-name comparison. Course names are longer and
/// noisier than skill names, so the bar sits a little lower.
pub const COURSE_MATCH_THRESHOLD: f64 = 0.75;

/// Fuzzy equality test between two free-text terms.
///
/// Both sides are NFKC-normalized, lowercased and trimmed first. Terms match
/// when they are equal, when either contains the other ("react" vs
/// "react.js"), or when their normalized Damerau-Levenshtein similarity
/// reaches `threshold`.
pub fn fuzzy_match(a: &str, b: &str, threshold: f64) -> bool {
    let a = nfkc_lower_trim(a);
    let b = nfkc_lower_trim(b);

    // An empty side only matches another empty side; without this guard the
    // containment test would accept "" against everything.
    if a.is_empty() || b.is_empty() {
        return a == b;
    }

    if a == b || a.contains(&b) || b.contains(&a) {
        return true;
    }

    normalized_damerau_levenshtein(&a, &b) >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_exact_match() {
        assert!(fuzzy_match("JavaScript", "javascript", SKILL_MATCH_THRESHOLD));
        assert!(fuzzy_match("  SQL ", "sql", SKILL_MATCH_THRESHOLD));
    }

    #[test]
    fn substring_containment_matches() {
        assert!(fuzzy_match("React", "react.js", SKILL_MATCH_THRESHOLD));
        assert!(fuzzy_match("node.js", "node", SKILL_MATCH_THRESHOLD));
    }

    #[test]
    fn small_typos_pass_the_skill_threshold() {
        assert!(fuzzy_match("postgresql", "postgresql ", SKILL_MATCH_THRESHOLD));
        assert!(fuzzy_match("javascript", "javascirpt", SKILL_MATCH_THRESHOLD));
    }

    #[test]
    fn unrelated_terms_do_not_match() {
        assert!(!fuzzy_match("python", "haskell", SKILL_MATCH_THRESHOLD));
        assert!(!fuzzy_match("excel", "sql", SKILL_MATCH_THRESHOLD));
    }

    #[test]
    fn empty_matches_only_empty() {
        assert!(fuzzy_match("", "  ", SKILL_MATCH_THRESHOLD));
        assert!(!fuzzy_match("", "rust", SKILL_MATCH_THRESHOLD));
        assert!(!fuzzy_match("rust", "", SKILL_MATCH_THRESHOLD));
    }

    #[test]
    fn threshold_is_tunable() {
        // "accounting" vs "accountancy": similar but below the 0.8 bar.
        assert!(!fuzzy_match("accounting", "accountancy", 0.9));
        assert!(fuzzy_match("accounting", "accountancy", 0.7));
    }
}
