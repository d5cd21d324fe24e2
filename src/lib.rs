pub mod api;
pub mod extraction;
pub mod logging;
pub mod matching;
pub mod normalize;

use serde::{Deserialize, Serialize};

use normalize::{dedupe_terms, split_skill_list};

// Commonly used data models for matching functions.

/// Requirements stated on a job posting, as supplied by the job posting
/// store. `required_skills` keeps the store's comma-separated text form;
/// use [`JobRequirement::required_skills_list`] for the parsed names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    #[serde(default)]
    pub required_skills: String,
    #[serde(default)]
    pub min_experience_years: u32,
    #[serde(default)]
    pub required_education: String,
    #[serde(default)]
    pub accepted_courses: Vec<String>,
}

impl JobRequirement {
    /// Comma-separated `required_skills` split into trimmed, non-empty names.
    /// An empty field means "no skill requirement".
    pub fn required_skills_list(&self) -> Vec<String> {
        split_skill_list(&self.required_skills)
    }

    /// Accepted course names with blanks removed and case-insensitive
    /// duplicates collapsed, original order preserved.
    pub fn accepted_courses_list(&self) -> Vec<String> {
        dedupe_terms(&self.accepted_courses)
    }
}

/// Structured resume data produced by the extraction collaborator.
/// Every field may be empty when the resume has not been processed yet.
/// `projects` is carried for presentation but never scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateData {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
}

/// Optional profile data pulled from an external source (e.g. LinkedIn).
/// Merged additively into the resume signals, never overriding them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalProfileData {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub years_experience: Option<u32>,
}
