use tracing::debug;

use super::fuzzy::fuzzy_match;
use super::round_to_tenth;
use crate::normalize::{nfkc_lower_trim, normalize_terms};

/// Outcome of the skill criterion for one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillScore {
    /// 0-100, one decimal place.
    pub score: f64,
    /// Required skills found in the candidate list, in requirement order.
    pub matched: Vec<String>,
    /// Required skills the candidate is missing, in requirement order.
    pub missing: Vec<String>,
}

/// Score the candidate's skills against the job's required skills.
///
/// Skill names on both sides are normalized; only the candidate list is
/// deduplicated — the requirement list is scored as stated, so a repeated
/// required skill counts once per occurrence in the denominator. A required
/// skill counts as matched when ANY candidate skill fuzzy-matches it. An
/// empty requirement list means full credit.
pub fn score_skills(
    required_skills: &[String],
    candidate_skills: &[String],
    threshold: f64,
) -> SkillScore {
    let required: Vec<String> = required_skills
        .iter()
        .map(|s| nfkc_lower_trim(s))
        .filter(|s| !s.is_empty())
        .collect();

    if required.is_empty() {
        return SkillScore {
            score: 100.0,
            matched: vec![],
            missing: vec![],
        };
    }

    let candidate = normalize_terms(candidate_skills);

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for req in &required {
        let hit = candidate.iter().any(|cand| fuzzy_match(req, cand, threshold));
        if hit {
            matched.push(req.clone());
        } else {
            missing.push(req.clone());
        }
    }

    let score = round_to_tenth(100.0 * matched.len() as f64 / required.len() as f64);
    debug!(
        required = required.len(),
        matched = matched.len(),
        score,
        "skill criterion scored"
    );

    SkillScore {
        score,
        matched,
        missing,
    }
}
