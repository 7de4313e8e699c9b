// Summarize every supported file under a directory, one file per call.
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::Result;
use crate::input::{is_supported, read_file};
use crate::nlp::summarization::{Summarizer, SummaryRequest, SummaryResult};

#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SummaryResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Supported files under `dir`, sorted by path.
pub fn collect_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_supported(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

pub fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {wide_bar} {pos}/{len} {msg}")
        .map(|s| s.progress_chars("=>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

/// Summarize each file in parallel. `template` supplies algorithm and limits;
/// its text is replaced by each file's content. Per-file failures are recorded
/// in the entry rather than aborting the batch.
pub fn summarize_files(
    summarizer: &Summarizer,
    files: &[PathBuf],
    template: &SummaryRequest,
    pb: &ProgressBar,
) -> Vec<BatchEntry> {
    let entries: Vec<BatchEntry> = files
        .par_iter()
        .map(|path| {
            let outcome = read_file(path).and_then(|text| {
                let request = SummaryRequest {
                    text,
                    ..template.clone()
                };
                summarizer.summarize(&request)
            });
            pb.inc(1);
            let path = path.to_string_lossy().to_string();
            match outcome {
                Ok(result) => BatchEntry {
                    path,
                    result: Some(result),
                    error: None,
                },
                Err(e) => {
                    warn!("Skipping {}: {}", path, e);
                    BatchEntry {
                        path,
                        result: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();
    pb.finish_with_message("summarized files");
    entries
}

pub fn write_entries(entries: &[BatchEntry], out: &Path) -> Result<()> {
    let fout = File::create(out)?;
    serde_json::to_writer_pretty(fout, entries)?;
    info!("Wrote {} batch entries to {}", entries.len(), out.display());
    Ok(())
}
