// Render a summary result as a plain-text, markdown or JSON report.
use serde::Serialize;

use crate::error::Result;
use crate::nlp::summarization::{Statistics, SummaryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Txt,
    Md,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Txt => "txt",
            ReportFormat::Md => "md",
            ReportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Txt => "text/plain",
            ReportFormat::Md => "text/markdown",
            ReportFormat::Json => "application/json",
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a str,
    keywords: &'a [String],
    statistics: &'a Statistics,
    algorithm_used: &'a str,
    exported_at: &'a str,
    version: &'static str,
}

/// Local time formatted for report headers.
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Export file name such as `summary_1700000000.md`.
pub fn default_filename(format: ReportFormat, unix_seconds: i64) -> String {
    format!("summary_{}.{}", unix_seconds, format.extension())
}

pub fn render(result: &SummaryResult, format: ReportFormat, generated_at: &str) -> Result<String> {
    let keywords = if result.keywords.is_empty() {
        "No keywords extracted".to_string()
    } else {
        result.keywords.join(", ")
    };
    let stats = &result.statistics;
    let footer = format!("Summify v{}", env!("CARGO_PKG_VERSION"));

    let content = match format {
        ReportFormat::Json => serde_json::to_string_pretty(&JsonReport {
            summary: &result.summary,
            keywords: &result.keywords,
            statistics: stats,
            algorithm_used: result.algorithm_used.as_str(),
            exported_at: generated_at,
            version: env!("CARGO_PKG_VERSION"),
        })?,
        ReportFormat::Md => format!(
            "# Summary Report\n\
             Generated on: {generated_at}\n\n\
             ## Summary\n{summary}\n\n\
             ## Keywords\n{keywords}\n\n\
             ## Statistics\n\
             - Original Length: {original} words\n\
             - Summary Length: {length} words\n\
             - Compression Ratio: {ratio}%\n\
             - Processing Time: {time}ms\n\
             - Algorithm: {algorithm}\n\n\
             ---\n*Generated by {footer}*\n",
            summary = result.summary,
            original = stats.original_length,
            length = stats.summary_length,
            ratio = stats.compression_ratio,
            time = stats.processing_time_ms,
            algorithm = result.algorithm_used,
        ),
        ReportFormat::Txt => format!(
            "SUMMARY REPORT\n\
             Generated on: {generated_at}\n\n\
             SUMMARY:\n{summary}\n\n\
             KEYWORDS:\n{keywords}\n\n\
             STATISTICS:\n\
             Original Length: {original} words\n\
             Summary Length: {length} words\n\
             Compression Ratio: {ratio}%\n\
             Processing Time: {time}ms\n\
             Algorithm: {algorithm}\n\n\
             Generated by {footer}\n",
            summary = result.summary,
            original = stats.original_length,
            length = stats.summary_length,
            ratio = stats.compression_ratio,
            time = stats.processing_time_ms,
            algorithm = result.algorithm_used,
        ),
    };
    Ok(content)
}
