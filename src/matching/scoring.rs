use serde::Serialize;
use tracing::debug;

use super::courses::match_courses;
use super::education::score_education;
use super::experience::score_experience;
use super::fuzzy::{COURSE_MATCH_THRESHOLD, SKILL_MATCH_THRESHOLD};
use super::round_to_tenth;
use super::skills::score_skills;
use super::weights::{Weights, MATCH_WEIGHTS};
use crate::{CandidateData, ExternalProfileData, JobRequirement};

/// Tunables for one engine instance. Thresholds default to the fixed
/// constants but can be raised or lowered per deployment via environment.
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub weights: Weights,
    pub skill_match_threshold: f64,
    pub course_match_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: MATCH_WEIGHTS,
            skill_match_threshold: env_threshold(
                "AM_SKILL_MATCH_THRESHOLD",
                SKILL_MATCH_THRESHOLD,
            ),
            course_match_threshold: env_threshold(
                "AM_COURSE_MATCH_THRESHOLD",
                COURSE_MATCH_THRESHOLD,
            ),
        }
    }
}

fn env_threshold(var: &str, fallback: f64) -> f64 {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|v| (0.0..=1.0).contains(v))
        .unwrap_or(fallback)
}

/// Full per-candidate result of one scoring call. Constructed fresh on
/// every call; all fields are always populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub total_score: f64,
    pub skills_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub course_match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_courses: Vec<String>,
    pub candidate_years: u32,
    pub required_years: u32,
    pub candidate_education_level: u8,
    pub required_education_level: u8,
}

impl ScoreBreakdown {
    pub fn rating(&self) -> Rating {
        Rating::from_score(self.total_score)
    }
}

/// Qualitative band for a composite score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Rating {
    pub fn from_score(total_score: f64) -> Self {
        if total_score >= 80.0 {
            Rating::Excellent
        } else if total_score >= 60.0 {
            Rating::Good
        } else if total_score >= 40.0 {
            Rating::Fair
        } else {
            Rating::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent Match",
            Rating::Good => "Good Match",
            Rating::Fair => "Fair Match",
            Rating::Poor => "Poor Match",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Score one candidate against one job with the default configuration.
pub fn calculate_match(
    job: &JobRequirement,
    candidate: &CandidateData,
    external: Option<&ExternalProfileData>,
) -> ScoreBreakdown {
    MatchEngine::default().calculate_match(job, candidate, external)
}

/// The matching engine proper: stateless apart from its configuration,
/// safely shareable across threads.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchingConfig,
}

impl MatchEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Run the four criterion scorers and combine them with the fixed
    /// weights. External profile data (if any) is merged additively into
    /// the skill and experience signals before scoring.
    pub fn calculate_match(
        &self,
        job: &JobRequirement,
        candidate: &CandidateData,
        external: Option<&ExternalProfileData>,
    ) -> ScoreBreakdown {
        let required_skills = job.required_skills_list();

        let mut candidate_skills = candidate.skills.clone();
        if let Some(external) = external {
            candidate_skills.extend(external.skills.iter().cloned());
        }
        let external_years = external.and_then(|e| e.years_experience);

        let skills = score_skills(
            &required_skills,
            &candidate_skills,
            self.config.skill_match_threshold,
        );
        let experience = score_experience(
            job.min_experience_years,
            &candidate.work_experience,
            external_years,
        );
        let education = score_education(&job.required_education, &candidate.education);
        let courses = match_courses(
            &job.accepted_courses_list(),
            &candidate.education,
            self.config.course_match_threshold,
        );

        let weights = self.config.weights;
        let total_score = round_to_tenth(
            skills.score * weights.skills
                + experience.score * weights.experience
                + education.score * weights.education
                + courses.percentage * weights.courses,
        );

        debug!(
            total_score,
            skills = skills.score,
            experience = experience.score,
            education = education.score,
            courses = courses.percentage,
            "candidate scored"
        );

        ScoreBreakdown {
            total_score,
            skills_score: skills.score,
            experience_score: experience.score,
            education_score: education.score,
            course_match_score: courses.percentage,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            matched_courses: courses.matched,
            candidate_years: experience.candidate_years,
            required_years: job.min_experience_years,
            candidate_education_level: education.candidate_level,
            required_education_level: education.required_level,
        }
    }
}
