use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Ordinal education scale used by job postings (1 = lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum EducationLevel {
    Certificate = 1,
    Diploma = 2,
    Bachelor = 3,
    Master = 4,
    Phd = 5,
}

impl EducationLevel {
    /// Resolve a posting's `required_education` name. Unrecognized values
    /// fail open to the lowest tier rather than rejecting the posting.
    pub fn from_required_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "phd" => Self::Phd,
            "master" => Self::Master,
            "bachelor" => Self::Bachelor,
            "diploma" => Self::Diploma,
            "certificate" => Self::Certificate,
            other => {
                if !other.is_empty() {
                    debug!(name = other, "unrecognized required education; defaulting to certificate");
                }
                Self::Certificate
            }
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

// Degree keywords, word-bounded so e.g. "diploma" never reads as "ma" and
// "mba" never reads as "ba".
static PHD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:ph\.?\s*d|doctorate|doctoral)\b").unwrap());
static MASTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:master(?:'s)?|m\.?\s?sc|mba|ma)\b").unwrap());
static BACHELOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:bachelor(?:'s)?|b\.?\s?sc|b\.?\s?a|degree)\b").unwrap());
static DIPLOMA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bdiploma\b").unwrap());
static CERTIFICATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bcertificate\b").unwrap());

/// Classify one free-text education entry by its highest detected level.
fn classify_entry(entry: &str) -> Option<EducationLevel> {
    if PHD_RE.is_match(entry) {
        Some(EducationLevel::Phd)
    } else if MASTER_RE.is_match(entry) {
        Some(EducationLevel::Master)
    } else if BACHELOR_RE.is_match(entry) {
        Some(EducationLevel::Bachelor)
    } else if DIPLOMA_RE.is_match(entry) {
        Some(EducationLevel::Diploma)
    } else if CERTIFICATE_RE.is_match(entry) {
        Some(EducationLevel::Certificate)
    } else {
        None
    }
}

/// Highest education level detected across all entries; 0 when none match.
pub fn candidate_level(education_entries: &[String]) -> u8 {
    education_entries
        .iter()
        .filter_map(|entry| classify_entry(entry))
        .map(EducationLevel::as_u8)
        .max()
        .unwrap_or(0)
}

/// Outcome of the education criterion for one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct EducationScore {
    /// 100 at or above the requirement, 50 one tier under, else 0.
    pub score: f64,
    /// Highest level detected in the resume; 0 when nothing was detected.
    pub candidate_level: u8,
    /// Required level resolved from the posting (1-5).
    pub required_level: u8,
}

/// Score the candidate's attainment against the job's required level.
pub fn score_education(required_level_name: &str, education_entries: &[String]) -> EducationScore {
    let required_level = EducationLevel::from_required_name(required_level_name).as_u8();
    let candidate_level = candidate_level(education_entries);

    let score = if candidate_level >= required_level {
        100.0
    } else if candidate_level > 0 && candidate_level == required_level - 1 {
        // One tier under the requirement earns partial credit.
        50.0
    } else {
        0.0
    };

    debug!(
        candidate_level,
        required_level, score, "education criterion scored"
    );

    EducationScore {
        score,
        candidate_level,
        required_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classifies_each_tier() {
        assert_eq!(candidate_level(&entries(&["PhD in Physics"])), 5);
        assert_eq!(candidate_level(&entries(&["Doctorate, Univ of X"])), 5);
        assert_eq!(candidate_level(&entries(&["MSc Data Science"])), 4);
        assert_eq!(candidate_level(&entries(&["MBA"])), 4);
        assert_eq!(candidate_level(&entries(&["MA Economics"])), 4);
        assert_eq!(candidate_level(&entries(&["BSc Computer Science"])), 3);
        assert_eq!(candidate_level(&entries(&["B.Sc Statistics"])), 3);
        assert_eq!(candidate_level(&entries(&["Degree in Marketing"])), 3);
        assert_eq!(candidate_level(&entries(&["Diploma in Nursing"])), 2);
        assert_eq!(candidate_level(&entries(&["Certificate in IT"])), 1);
    }

    #[test]
    fn diploma_is_not_mistaken_for_master() {
        // "diploma" contains "ma"; word boundaries must prevent tier 4.
        assert_eq!(candidate_level(&entries(&["Diploma in Accounting"])), 2);
    }

    #[test]
    fn highest_level_wins_within_and_across_entries() {
        assert_eq!(
            candidate_level(&entries(&["Master's degree in CS"])),
            4,
            "entry mentioning both master and degree takes the higher tier"
        );
        assert_eq!(
            candidate_level(&entries(&["Certificate in IT", "PhD in CS"])),
            5
        );
    }

    #[test]
    fn no_detectable_education_is_level_zero() {
        assert_eq!(candidate_level(&entries(&["Self-taught programmer"])), 0);
        assert_eq!(candidate_level(&[]), 0);
    }

    #[test]
    fn unrecognized_required_name_defaults_to_lowest() {
        let result = score_education("Doctorate of Things", &entries(&["Certificate in IT"]));
        assert_eq!(result.required_level, 1);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn meeting_the_requirement_scores_full() {
        let result = score_education("Bachelor", &entries(&["BSc Statistics"]));
        assert_eq!(result.score, 100.0);
        assert_eq!(result.candidate_level, 3);
        assert_eq!(result.required_level, 3);
    }

    #[test]
    fn one_tier_under_scores_half() {
        let result = score_education("Master", &entries(&["BSc Computer Science"]));
        assert_eq!(result.candidate_level, 3);
        assert_eq!(result.required_level, 4);
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn two_tiers_under_scores_zero() {
        let result = score_education("Master", &entries(&["Diploma in IT"]));
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn no_education_scores_zero_even_against_lowest_requirement() {
        let result = score_education("Certificate", &[]);
        assert_eq!(result.candidate_level, 0);
        assert_eq!(result.score, 0.0);
    }
}
