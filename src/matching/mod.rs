pub mod courses;
pub mod education;
pub mod experience;
pub mod fuzzy;
pub mod pipeline;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use courses::{match_courses, CourseMatch};
pub use education::{score_education, EducationLevel, EducationScore};
pub use experience::{score_experience, ExperienceScore};
pub use fuzzy::fuzzy_match;
pub use pipeline::{ApplicantRecord, RankedApplicant, RankingPipeline};
pub use scoring::{calculate_match, MatchEngine, MatchingConfig, Rating, ScoreBreakdown};
pub use skills::{score_skills, SkillScore};
pub use weights::{Weights, MATCH_WEIGHTS};

/// All criterion scores and the composite are reported to one decimal place.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
