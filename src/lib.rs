//! Summify: extractive summarization and keyword extraction.
//!
//! Sentences are scored with word-frequency, position or hybrid heuristics and
//! the best ones are emitted in document order. When the linguistic corpus is
//! available (`linguistic` feature) Unicode segmentation and an English
//! stop-word list are used; otherwise regex patterns take over.

pub mod batch;
pub mod config;
pub mod error;
pub mod input;
pub mod nlp;
pub mod report;
pub mod samples;
pub mod status;

pub use config::EngineConfig;
pub use error::{Result, SummifyError};
pub use nlp::{extract_keywords, summarize, Algorithm, Summarizer, SummaryRequest, SummaryResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_summarize_and_keywords() {
        let result = summarize(
            "Solar power is growing fast. Solar panels are cheaper every year. Storage keeps solar power useful at night.",
            "unknown",
            1,
        )
        .unwrap();
        assert_eq!(result.algorithm_used, Algorithm::Frequency);
        assert!(!result.summary.is_empty());
        assert!(result.keywords.iter().any(|k| k == "solar"));

        let keywords = extract_keywords("solar solar panels", 1);
        assert_eq!(keywords, vec!["solar"]);
    }

    #[test]
    fn test_global_summarize_rejects_empty() {
        assert!(matches!(summarize("", "frequency", 3), Err(SummifyError::InvalidInput(_))));
    }
}
