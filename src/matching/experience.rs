use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::round_to_tenth;

lazy_static! {
    // Parenthesized tenure: "Software Dev (2 Years)" / "(1 year)"
    static ref PAREN_YEARS_RE: Regex = Regex::new(r"(?i)\((\d+)\s*years?\)").unwrap();
    // Ongoing role without an explicit count: "Started at Acme in June"
    static ref STARTED_RE: Regex = Regex::new(r"(?i)\bstarted\b").unwrap();
    // Year range: "2020-2023" (this century only)
    static ref YEAR_RANGE_RE: Regex = Regex::new(r"\b(20\d{2})-(20\d{2})\b").unwrap();
}

/// Outcome of the experience criterion for one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceScore {
    /// 0-100, one decimal place.
    pub score: f64,
    /// Total years credited across all entries plus external profile data.
    pub candidate_years: u32,
}

/// Years credited to a single work-experience entry.
///
/// The three extraction patterns are tried in order and only the first
/// successful one counts; an entry that matches none contributes 0.
/// Unparsable or reversed numbers are skipped silently (best effort).
fn years_from_entry(entry: &str) -> u32 {
    if let Some(caps) = PAREN_YEARS_RE.captures(entry) {
        match caps[1].parse::<u32>() {
            Ok(years) => return years,
            Err(_) => {
                debug!(entry, "unparsable parenthesized year count; skipping entry");
                return 0;
            }
        }
    }

    if STARTED_RE.is_match(entry) {
        // No explicit count; assume one year of tenure.
        return 1;
    }

    if let Some(caps) = YEAR_RANGE_RE.captures(entry) {
        let start: u32 = caps[1].parse().unwrap_or(0);
        let end: u32 = caps[2].parse().unwrap_or(0);
        if end >= start && start > 0 {
            return end - start;
        }
        debug!(entry, "reversed year range; skipping entry");
    }

    0
}

/// Score the candidate's accumulated experience against the job's minimum.
///
/// Meeting or exceeding the requirement (or a zero requirement) gives full
/// credit; otherwise credit is proportional, capped at 100.
pub fn score_experience(
    required_years: u32,
    experience_entries: &[String],
    external_years: Option<u32>,
) -> ExperienceScore {
    let candidate_years = experience_entries
        .iter()
        .map(|entry| years_from_entry(entry))
        .fold(0u32, u32::saturating_add)
        .saturating_add(external_years.unwrap_or(0));

    let score = if required_years == 0 || candidate_years >= required_years {
        100.0
    } else {
        let partial = 100.0 * candidate_years as f64 / required_years as f64;
        round_to_tenth(partial.min(100.0))
    };

    debug!(
        candidate_years,
        required_years, score, "experience criterion scored"
    );

    ExperienceScore {
        score,
        candidate_years,
    }
}
