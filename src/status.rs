// Capability report for callers that want to know what the engine can do.
use serde::Serialize;

use crate::nlp::corpus::{CorpusStatus, FrequencyCorpus};
use crate::nlp::scorer::Algorithm;
use crate::nlp::summarization::Summarizer;

#[derive(Debug, Clone, Serialize)]
pub struct Capabilities {
    pub service: &'static str,
    pub version: &'static str,
    pub text_summarization: bool,
    pub keyword_extraction: bool,
    /// True when the linguistic tokenizer and stop-word corpus are in use
    pub linguistic_support: bool,
    pub strategy: &'static str,
    pub corpus: CorpusStatus,
    pub corpus_note: Option<String>,
    pub algorithms: Vec<Algorithm>,
    pub timestamp: String,
}

impl Capabilities {
    pub fn probe(summarizer: &Summarizer, corpus: &FrequencyCorpus) -> Self {
        let corpus_note = corpus.unavailable_reason().map(str::to_string);
        Self {
            service: "summify",
            version: env!("CARGO_PKG_VERSION"),
            text_summarization: true,
            keyword_extraction: true,
            linguistic_support: summarizer.is_linguistic(),
            strategy: summarizer.strategy_name(),
            corpus: corpus.status(),
            corpus_note,
            algorithms: Algorithm::ALL.to_vec(),
            timestamp: chrono::Local::now().to_rfc3339(),
        }
    }
}
