//! Data models for the generation pipeline.
//!
//! Everything here is a plain value type: built once per invocation, never
//! mutated, serialized with serde at the CLI boundary.

use serde::{Deserialize, Serialize};

/// Immutable input bundle for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub job_description: String,
    pub candidate_resume: String,
    /// Accepted but not consumed by any pipeline stage. Latent extension
    /// point for values-alignment phrasing.
    pub company_vision: Option<String>,
}

/// Candidate fields derived from the résumé text.
///
/// `email` and `phone` are extracted or defaulted, never empty. `name`,
/// `title`, and `experience` are fixed defaults in the current design; see
/// `generation::candidate` for the default constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
}

/// One block of work experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub achievements: Vec<String>,
}

/// Terminal output of the pipeline. Field names are the wire format:
/// the output JSON carries exactly these three keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub resume_md: String,
    pub fit_summary: String,
    pub keywords: Vec<String>,
}
