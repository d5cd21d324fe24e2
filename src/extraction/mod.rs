//! Seam to the resume-extraction collaborator.
//!
//! OCR and NLP live behind this trait in a separate service; the matching
//! engine only ever sees the structured [`CandidateData`] it returns. The
//! handle is constructed explicitly and injected, so the engine can be
//! tested deterministically without loading any model.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::CandidateData;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("resume text is empty")]
    EmptyInput,
    #[error("no extraction available for applicant {0}")]
    NotExtracted(i64),
    #[error("extraction backend failed: {0}")]
    Backend(String),
}

/// Handle to whatever produces structured resume data.
pub trait ResumeExtractor: Send + Sync {
    fn extract(&self, applicant_id: i64, resume_text: &str)
        -> Result<CandidateData, ExtractionError>;
}

/// Extractor backed by precomputed results, keyed by applicant id.
///
/// Used in tests and anywhere extraction already happened upstream (the
/// common case: the platform stores extraction output and only re-scores).
#[derive(Debug, Clone, Default)]
pub struct PrecomputedExtractor {
    results: HashMap<i64, CandidateData>,
}

impl PrecomputedExtractor {
    pub fn new(results: HashMap<i64, CandidateData>) -> Self {
        Self { results }
    }

    pub fn insert(&mut self, applicant_id: i64, data: CandidateData) {
        self.results.insert(applicant_id, data);
    }
}

impl ResumeExtractor for PrecomputedExtractor {
    fn extract(
        &self,
        applicant_id: i64,
        resume_text: &str,
    ) -> Result<CandidateData, ExtractionError> {
        if resume_text.trim().is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        match self.results.get(&applicant_id) {
            Some(data) => {
                debug!(applicant_id, "served precomputed extraction");
                Ok(data.clone())
            }
            None => Err(ExtractionError::NotExtracted(applicant_id)),
        }
    }
}
