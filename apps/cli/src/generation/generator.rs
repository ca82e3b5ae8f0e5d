//! Orchestrator - sequences the full generation pipeline.
//!
//! Flow: extract_keywords → parse_candidate_info → render_resume →
//! render_fit_summary → assemble GenerationResult. Strictly one-directional;
//! no stage sees the output of a later stage. Pure and deterministic, so a
//! repeated call with the same request yields a byte-identical result.

use tracing::{debug, info};

use crate::generation::candidate::parse_candidate_info;
use crate::generation::keywords::extract_keywords;
use crate::generation::renderer::{render_fit_summary, render_resume};
use crate::models::resume::{GenerationRequest, GenerationResult};

/// Runs the pipeline for one request.
pub fn generate(request: &GenerationRequest) -> GenerationResult {
    let keywords = extract_keywords(&request.job_description);
    info!("Extracted {} keywords from job description", keywords.len());

    let info = parse_candidate_info(&request.candidate_resume);
    info!(
        "Parsed candidate info: {} skills, contact {}",
        info.skills.len(),
        info.email
    );

    if request.company_vision.is_some() {
        // Accepted but unused: no stage consumes company vision yet.
        debug!("Company vision supplied; not consumed by any pipeline stage");
    }

    let resume_md = render_resume(&info, &keywords);
    let fit_summary = render_fit_summary(&info, &keywords);
    info!("Rendered resume ({} bytes) and fit summary", resume_md.len());

    GenerationResult {
        resume_md,
        fit_summary,
        keywords,
    }
}
