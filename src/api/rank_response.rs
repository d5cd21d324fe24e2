use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::matching::{RankedApplicant, ScoreBreakdown};

/// Ranking response for presentation: results are already ordered
/// best-first and optionally truncated to the caller's limit.
#[derive(Debug, Clone, Serialize)]
pub struct RankResponse {
    pub total_applicants: usize,
    pub results: Vec<RankedApplicantEntry>,
}

/// One row of the ranked-applicants listing.
#[derive(Debug, Clone, Serialize)]
pub struct RankedApplicantEntry {
    pub applicant_id: i64,
    pub total_score: f64,
    pub rating: &'static str,
    pub breakdown: ScoreBreakdown,
    pub applied_at: Option<DateTime<Utc>>,
}

impl From<RankedApplicant> for RankedApplicantEntry {
    fn from(ranked: RankedApplicant) -> Self {
        Self {
            applicant_id: ranked.applicant_id,
            total_score: ranked.breakdown.total_score,
            rating: ranked.rating.label(),
            applied_at: ranked.applied_at,
            breakdown: ranked.breakdown,
        }
    }
}

impl RankResponse {
    pub fn from_ranked(ranked: Vec<RankedApplicant>, limit: Option<usize>) -> Self {
        let total_applicants = ranked.len();
        let results = ranked
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(RankedApplicantEntry::from)
            .collect();

        Self {
            total_applicants,
            results,
        }
    }
}
