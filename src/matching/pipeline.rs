use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::scoring::{MatchEngine, Rating, ScoreBreakdown};
use crate::{CandidateData, ExternalProfileData, JobRequirement};

/// One applicant as submitted for ranking: extraction output plus optional
/// external profile data, tagged with the caller's identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub applicant_id: i64,
    #[serde(default)]
    pub resume: CandidateData,
    #[serde(default)]
    pub external: Option<ExternalProfileData>,
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
}

/// A scored applicant in ranking order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedApplicant {
    pub applicant_id: i64,
    pub rating: Rating,
    pub breakdown: ScoreBreakdown,
    pub applied_at: Option<DateTime<Utc>>,
}

/// Scores a list of applicants for one job and orders them best-first.
///
/// The sort is stable and descending on `total_score`, so applicants with
/// equal scores keep their submission order.
#[derive(Debug, Clone, Default)]
pub struct RankingPipeline {
    engine: MatchEngine,
}

impl RankingPipeline {
    pub fn new(engine: MatchEngine) -> Self {
        Self { engine }
    }

    pub fn rank_applicants(
        &self,
        job: &JobRequirement,
        applicants: &[ApplicantRecord],
    ) -> Vec<RankedApplicant> {
        let mut ranked: Vec<RankedApplicant> = applicants
            .iter()
            .map(|applicant| {
                let breakdown = self.engine.calculate_match(
                    job,
                    &applicant.resume,
                    applicant.external.as_ref(),
                );
                RankedApplicant {
                    applicant_id: applicant.applicant_id,
                    rating: breakdown.rating(),
                    breakdown,
                    applied_at: applicant.applied_at,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.breakdown
                .total_score
                .partial_cmp(&a.breakdown.total_score)
                .unwrap_or(Ordering::Equal)
        });

        info!(
            applicants = applicants.len(),
            top_score = ranked.first().map(|r| r.breakdown.total_score),
            "ranked applicants for job"
        );

        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> JobRequirement {
        JobRequirement {
            required_skills: "Python, SQL".into(),
            min_experience_years: 2,
            required_education: "Bachelor".into(),
            accepted_courses: vec![],
        }
    }

    fn applicant(id: i64, skills: &[&str]) -> ApplicantRecord {
        ApplicantRecord {
            applicant_id: id,
            resume: CandidateData {
                skills: skills.iter().map(|s| s.to_string()).collect(),
                work_experience: vec!["Dev (3 Years)".into()],
                education: vec!["BSc Computer Science".into()],
                projects: vec![],
            },
            external: None,
            applied_at: None,
        }
    }

    #[test]
    fn orders_by_total_score_descending() {
        let pipeline = RankingPipeline::default();
        let weaker = applicant(1, &["python"]);
        let stronger = applicant(2, &["python", "sql"]);

        let ranked = pipeline.rank_applicants(&job(), &[weaker, stronger]);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].applicant_id, 2);
        assert!(ranked[0].breakdown.total_score > ranked[1].breakdown.total_score);
    }

    #[test]
    fn ties_keep_submission_order() {
        let pipeline = RankingPipeline::default();
        let first = applicant(10, &["python", "sql"]);
        let second = applicant(20, &["python", "sql"]);

        let ranked = pipeline.rank_applicants(&job(), &[first, second]);

        assert_eq!(ranked[0].breakdown.total_score, ranked[1].breakdown.total_score);
        assert_eq!(ranked[0].applicant_id, 10);
        assert_eq!(ranked[1].applicant_id, 20);
    }

    #[test]
    fn unprocessed_resumes_still_rank() {
        let pipeline = RankingPipeline::default();
        let empty = ApplicantRecord {
            applicant_id: 7,
            ..ApplicantRecord::default()
        };

        let ranked = pipeline.rank_applicants(&job(), &[applicant(1, &["python"]), empty]);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[1].applicant_id, 7);
        assert_eq!(ranked[1].rating, Rating::Poor);
    }
}
