//! Fit Scoring - deterministic resume-vs-JD fit report.
//!
//! Pure lexical coverage, no semantic understanding: every dimension is a
//! ratio of matched terms over the same pattern-group machinery the
//! extractor uses. Fast, deterministic, fully testable. The report is a
//! side channel (logged, optionally written to its own file); it never
//! changes the primary three-key output document.

use serde::{Deserialize, Serialize};

use crate::generation::keywords::{matched_group_names, matches_for_group};
use crate::models::resume::{CandidateInfo, GenerationRequest};

/// Per-dimension scores, each 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitBreakdown {
    /// Share of extracted JD keywords present in the candidate résumé.
    pub keyword_match: u32,
    /// Share of JD-matched pattern groups also matched by the résumé.
    pub theme_alignment: u32,
    /// Share of the JD's role/seniority terms present in the résumé.
    pub experience_relevance: u32,
    /// Share of parsed candidate skills present in the JD.
    pub skill_overlap: u32,
}

/// Full fit report: overall score, breakdown, and a recommendation string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub overall_score: u32,
    pub breakdown: FitBreakdown,
    pub explanation: String,
}

/// Scores candidate-vs-JD fit from already-extracted keywords and parsed
/// candidate info. Pure and deterministic.
pub fn score_fit(
    request: &GenerationRequest,
    keywords: &[String],
    info: &CandidateInfo,
) -> FitReport {
    if keywords.is_empty() {
        return FitReport {
            overall_score: 0,
            breakdown: FitBreakdown {
                keyword_match: 0,
                theme_alignment: 0,
                experience_relevance: 0,
                skill_overlap: 0,
            },
            explanation: "No keywords found in the job description - cannot score fit."
                .to_string(),
        };
    }

    let jd = request.job_description.to_lowercase();
    let resume = request.candidate_resume.to_lowercase();

    let keyword_match = coverage(keywords.iter().map(String::as_str), &resume);

    let jd_groups = matched_group_names(&request.job_description);
    let resume_groups = matched_group_names(&request.candidate_resume);
    let theme_alignment = coverage(
        jd_groups.iter().copied(),
        // Group names are compared directly, not searched as substrings.
        &resume_groups.join("\n"),
    );

    let jd_role_terms = matches_for_group("role", &request.job_description);
    let experience_relevance = if jd_role_terms.is_empty() {
        // No seniority signal in the JD; fall back to keyword coverage.
        keyword_match
    } else {
        coverage(jd_role_terms.iter().map(String::as_str), &resume)
    };

    let skill_overlap = coverage(info.skills.iter().map(String::as_str), &jd);

    let breakdown = FitBreakdown {
        keyword_match,
        theme_alignment,
        experience_relevance,
        skill_overlap,
    };
    let overall_score =
        (keyword_match + theme_alignment + experience_relevance + skill_overlap) / 4;
    let explanation = build_explanation(overall_score, &breakdown);

    FitReport {
        overall_score,
        breakdown,
        explanation,
    }
}

/// Percentage (0-100, rounded) of `terms` found in `haystack` as
/// case-insensitive substrings. Empty term list scores 0.
fn coverage<'a>(terms: impl Iterator<Item = &'a str>, haystack: &str) -> u32 {
    let mut total = 0u32;
    let mut hits = 0u32;
    for term in terms {
        total += 1;
        if haystack.contains(term) {
            hits += 1;
        }
    }
    if total == 0 {
        return 0;
    }
    (hits * 100 + total / 2) / total
}

/// Thresholded recommendation string naming the weakest dimension.
fn build_explanation(score: u32, breakdown: &FitBreakdown) -> String {
    let weakest = [
        ("keyword match", breakdown.keyword_match),
        ("theme alignment", breakdown.theme_alignment),
        ("experience relevance", breakdown.experience_relevance),
        ("skill overlap", breakdown.skill_overlap),
    ]
    .into_iter()
    .min_by_key(|(_, v)| *v)
    .map(|(name, _)| name)
    .unwrap_or("keyword match");

    if score >= 80 {
        "Strong fit. The resume directly covers the key job requirements.".to_string()
    } else if score >= 60 {
        format!("Moderate fit ({score}/100). Weakest dimension: {weakest}.")
    } else {
        format!(
            "Low fit ({score}/100). Significant gaps, starting with {weakest}. \
             Consider tailoring further before applying."
        )
    }
}
