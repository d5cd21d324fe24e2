use serde::Deserialize;

use crate::matching::ApplicantRecord;
use crate::JobRequirement;

/// Ranking request from a caller: one job, many applicants.
#[derive(Debug, Clone, Deserialize)]
pub struct RankRequest {
    pub job: JobRequirement,
    #[serde(default)]
    pub applicants: Vec<ApplicantRecord>,
    /// Keep only the top N results; `None` returns everything.
    #[serde(default)]
    pub limit: Option<usize>,
}
