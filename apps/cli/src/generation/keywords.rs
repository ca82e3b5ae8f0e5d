//! Keyword Extractor - scans a job description against fixed lexical
//! pattern groups and returns a bounded, deduplicated, sorted keyword list.
//!
//! The groups are data, not logic: extend the table, not the function.
//! Matching is lexical only; a keyword is a matched term, not a validated
//! skill.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Hard cap on the returned keyword list.
pub const MAX_KEYWORDS: usize = 15;

/// A named group of alternative terms, matched case-insensitively as whole
/// words.
pub struct PatternGroup {
    pub name: &'static str,
    pattern: &'static str,
}

/// Ordered pattern groups applied to the job description. Order only affects
/// match collection, not the final (sorted) output.
pub const PATTERN_GROUPS: &[PatternGroup] = &[
    PatternGroup {
        name: "technology",
        pattern: r"(?i)\b(?:Python|JavaScript|TypeScript|React|Node\.js|AWS|GCP|Azure|Docker|Kubernetes|API|ML|AI|SQL|NoSQL)\b",
    },
    PatternGroup {
        name: "architecture",
        pattern: r"(?i)\b(?:microservices|distributed|scalable|architecture|infrastructure|DevOps|CI/CD)\b",
    },
    PatternGroup {
        name: "product",
        pattern: r"(?i)\b(?:product|growth|analytics|metrics|A/B testing|user experience|UX)\b",
    },
    PatternGroup {
        name: "leadership",
        pattern: r"(?i)\b(?:leadership|team|management|strategy|vision|roadmap)\b",
    },
    PatternGroup {
        name: "role",
        pattern: r"(?i)\b(?:senior|principal|staff|lead|director|manager|engineer|developer|architect|designer|analyst|specialist|expert|experienced|proven|strong|deep|extensive|innovative|strategic|technical|business|product|growth|scale|performance|security|quality|agile|lean|startup|enterprise)\b",
    },
];

static COMPILED_GROUPS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    PATTERN_GROUPS
        .iter()
        .map(|group| {
            let re = Regex::new(group.pattern).expect("pattern group is a valid regex literal");
            (group.name, re)
        })
        .collect()
});

/// Extracts keywords from a job description.
///
/// All matches across all groups are merged into one lower-cased set, sorted
/// lexicographically, and truncated to [`MAX_KEYWORDS`]. Empty input yields
/// an empty vec. Pure and deterministic.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    let text = job_description.to_lowercase();

    let mut found = BTreeSet::new();
    for (_name, re) in COMPILED_GROUPS.iter() {
        for m in re.find_iter(&text) {
            found.insert(m.as_str().to_string());
        }
    }

    found.into_iter().take(MAX_KEYWORDS).collect()
}

/// Names of the pattern groups that match at least once in `text`.
/// Used by fit scoring to compare theme coverage between texts.
pub fn matched_group_names(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    COMPILED_GROUPS
        .iter()
        .filter(|(_, re)| re.is_match(&lowered))
        .map(|(name, _)| *name)
        .collect()
}

/// Unique lower-cased matches for a single named group.
pub fn matches_for_group(group: &str, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut found = BTreeSet::new();
    for (name, re) in COMPILED_GROUPS.iter() {
        if *name != group {
            continue;
        }
        for m in re.find_iter(&lowered) {
            found.insert(m.as_str().to_string());
        }
    }
    found.into_iter().collect()
}
