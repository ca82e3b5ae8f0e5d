//! Input text normalization, applied at the CLI boundary before the
//! pipeline runs: trim, collapse horizontal whitespace runs, collapse 3+
//! consecutive newlines to 2, truncate overlong input with a marker.
//! The core pipeline never normalizes; it assumes already-clean text.

use std::sync::LazyLock;

use regex::Regex;

/// Character limit for a single input document.
pub const MAX_INPUT_CHARS: usize = 10_000;
/// Appended when input is cut at [`MAX_INPUT_CHARS`].
pub const TRUNCATION_MARKER: &str = "...[truncated]";

static HORIZONTAL_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("whitespace pattern is a valid regex literal"));

static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline pattern is a valid regex literal"));

/// Normalizes raw input text. Pure; idempotent.
pub fn normalize_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let collapsed = HORIZONTAL_RUNS.replace_all(trimmed, " ");
    let mut normalized = NEWLINE_RUNS.replace_all(&collapsed, "\n\n").into_owned();

    if normalized.chars().count() > MAX_INPUT_CHARS {
        normalized = normalized.chars().take(MAX_INPUT_CHARS).collect();
        normalized.push_str(TRUNCATION_MARKER);
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize_text("  hello  "), "hello");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   \n\t  "), "");
    }

    #[test]
    fn test_collapses_horizontal_runs() {
        assert_eq!(normalize_text("a  b\t\tc"), "a b c");
    }

    #[test]
    fn test_preserves_single_and_double_newlines() {
        assert_eq!(normalize_text("a\nb\n\nc"), "a\nb\n\nc");
    }

    #[test]
    fn test_collapses_newline_runs_to_two() {
        assert_eq!(normalize_text("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_truncates_with_marker() {
        let long = "x".repeat(MAX_INPUT_CHARS + 500);
        let normalized = normalize_text(&long);
        assert_eq!(
            normalized.chars().count(),
            MAX_INPUT_CHARS + TRUNCATION_MARKER.chars().count()
        );
        assert!(normalized.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_short_input_not_truncated() {
        let text = "short résumé text";
        assert!(!normalize_text(text).contains(TRUNCATION_MARKER));
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_text("  a   b\n\n\n\nc  ");
        assert_eq!(normalize_text(&once), once);
    }
}
