mod errors;
mod generation;
mod models;
mod normalize;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::AppError;
use crate::generation::candidate::parse_candidate_info;
use crate::generation::fit_scoring::score_fit;
use crate::generation::generator::generate;
use crate::models::resume::GenerationRequest;
use crate::normalize::normalize_text;

/// Generate a tailored, ATS-friendly resume from a job description and an
/// existing resume.
#[derive(Parser)]
#[command(name = "tailor", version)]
struct Cli {
    /// Path to the job description text file
    #[arg(long = "job-desc")]
    job_desc: PathBuf,

    /// Path to the current resume text file
    #[arg(long)]
    resume: PathBuf,

    /// Path to a company vision text file (optional; accepted, not yet used)
    #[arg(long = "company-vision")]
    company_vision: Option<PathBuf>,

    /// Output path for the generated JSON document
    #[arg(long, default_value = "tailored_resume.json")]
    output: PathBuf,

    /// Also write the deterministic fit report as JSON to this path
    #[arg(long = "fit-report")]
    fit_report: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the confirmation line.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(&cli)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let job_description = read_input_file(&cli.job_desc)?;
    let candidate_resume = read_input_file(&cli.resume)?;
    let company_vision = cli
        .company_vision
        .as_deref()
        .map(read_input_file)
        .transpose()?;

    let request = GenerationRequest {
        job_description,
        candidate_resume,
        company_vision,
    };

    let result = generate(&request);

    let report = score_fit(
        &request,
        &result.keywords,
        &parse_candidate_info(&request.candidate_resume),
    );
    info!(
        "Fit score: {}/100 - {}",
        report.overall_score, report.explanation
    );
    if let Some(path) = &cli.fit_report {
        write_json(path, &report)?;
        info!("Fit report written to {}", path.display());
    }

    write_json(&cli.output, &result)?;
    println!("Tailored resume generated: {}", cli.output.display());
    Ok(())
}

/// Reads and normalizes one input document.
fn read_input_file(path: &Path) -> Result<String, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_text(&raw))
}

/// Serializes `value` as pretty-printed JSON and writes it to `path`.
fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| AppError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::GenerationResult;

    #[test]
    fn test_read_input_file_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jd.txt");
        fs::write(&path, "  Senior   Rust engineer\n\n\n\nRemote  ").unwrap();

        let text = read_input_file(&path).unwrap();
        assert_eq!(text, "Senior Rust engineer\n\nRemote");
    }

    #[test]
    fn test_read_input_file_missing_is_reported_with_path() {
        let err = read_input_file(Path::new("/nonexistent/jd.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/jd.txt"));
    }

    #[test]
    fn test_write_json_round_trips_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let result = GenerationResult {
            resume_md: "# John Doe".to_string(),
            fit_summary: "Strong fit.".to_string(),
            keywords: vec!["python".to_string()],
        };

        write_json(&path, &result).unwrap();
        let recovered: GenerationResult =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(recovered, result);
    }

    #[test]
    fn test_end_to_end_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let jd = dir.path().join("jd.txt");
        let resume = dir.path().join("resume.txt");
        let output = dir.path().join("tailored_resume.json");
        fs::write(&jd, "Senior Python Engineer with AWS experience").unwrap();
        fs::write(&resume, "jane.doe@example.com 555-123-4567 Python").unwrap();

        let cli = Cli {
            job_desc: jd,
            resume,
            company_vision: None,
            output: output.clone(),
            fit_report: None,
        };
        run(&cli).unwrap();

        let result: GenerationResult =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert!(result.keywords.iter().any(|k| k == "python"));
        assert!(result.resume_md.contains("jane.doe@example.com"));
    }
}
