// Extractive summarization pipeline.
//
// Validate -> segment -> model -> score & select -> assemble -> statistics.
// Degenerate input takes an explicit fallback branch and is tagged in the
// result; only invalid requests surface as errors.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, warn};

use super::corpus::FrequencyCorpus;
use super::frequency::FrequencyTable;
use super::keywords;
use super::scorer::{score_sentences, Algorithm};
use super::selector::{select_top, selected_sentences};
use super::tokenizer::{select_strategy, PatternStrategy, StrategyKind, TextStrategy};
use crate::config::EngineConfig;
use crate::error::{Result, SummifyError};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static DEFAULT_SUMMARIZER: Lazy<Summarizer> =
    Lazy::new(|| Summarizer::from_config(&EngineConfig::from_env()));

pub const NO_CONTENT: &str = "No content to summarize.";
pub const NO_SUMMARY: &str = "No summary generated.";

/// Inputs with fewer words than this are returned as-is.
const MIN_WORDS: usize = 5;
/// Single-sentence inputs are cut to this many characters.
const TRUNCATE_CHARS: usize = 200;
const MAX_SENTENCES_RANGE: (usize, usize) = (1, 10);

/// Tried in order until one produces a summary.
const FALLBACK_CHAIN: [SummaryStrategy; 2] = [SummaryStrategy::Extractive, SummaryStrategy::NaiveSplit];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub text: String,
    pub algorithm: Algorithm,
    pub max_sentences: usize,
    pub num_keywords: usize,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_config(text, &EngineConfig::default())
    }

    /// A request carrying the configured defaults.
    pub fn from_config(text: impl Into<String>, config: &EngineConfig) -> Self {
        Self {
            text: text.into(),
            algorithm: config.algorithm,
            max_sentences: config.max_sentences,
            num_keywords: config.num_keywords,
        }
    }

    /// Set the algorithm by name; unknown names mean `frequency`.
    pub fn algorithm(mut self, name: &str) -> Self {
        self.algorithm = Algorithm::normalize(name);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn max_sentences(mut self, n: usize) -> Self {
        self.max_sentences = n;
        self
    }

    pub fn num_keywords(mut self, n: usize) -> Self {
        self.num_keywords = n;
        self
    }
}

/// Why a result took a fallback branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradedReason {
    EmptyText,
    TooShort,
    SingleSentence,
    NoFrequencySignal,
    EmptySelection,
    NaiveSplit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum SummaryStatus {
    Complete,
    Degraded(DegradedReason),
}

impl SummaryStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, SummaryStatus::Degraded(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub original_length: usize,
    pub summary_length: usize,
    pub compression_ratio: i64,
    pub processing_time_ms: u64,
}

impl Statistics {
    pub fn compute(original: &str, summary: &str, processing_time_ms: u64) -> Self {
        let original_length = word_count(original);
        let summary_length = word_count(summary);
        Self {
            original_length,
            summary_length,
            compression_ratio: compression_ratio(original_length, summary_length),
            processing_time_ms,
        }
    }
}

/// Percentage of words removed, rounded; 0 for an empty original.
pub fn compression_ratio(original_length: usize, summary_length: usize) -> i64 {
    if original_length == 0 {
        return 0;
    }
    ((1.0 - summary_length as f64 / original_length as f64) * 100.0).round() as i64
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    pub summary: String,
    pub keywords: Vec<String>,
    #[serde(flatten)]
    pub statistics: Statistics,
    pub algorithm_used: Algorithm,
    pub status: SummaryStatus,
}

#[derive(Debug, Error)]
enum StageError {
    #[error("internal stage failure: {0}")]
    Panicked(String),
}

impl StageError {
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        StageError::Panicked(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SummaryStrategy {
    Extractive,
    NaiveSplit,
}

struct Draft {
    text: String,
    status: SummaryStatus,
}

impl Draft {
    fn complete(text: String) -> Self {
        Self { text, status: SummaryStatus::Complete }
    }

    fn degraded(text: String, reason: DegradedReason) -> Self {
        Self { text, status: SummaryStatus::Degraded(reason) }
    }
}

/// The summarization engine. Holds the tokenization strategy chosen once at
/// construction; every call is independent, so one instance can be shared
/// across threads.
#[derive(Clone)]
pub struct Summarizer {
    strategy: Arc<dyn TextStrategy>,
    max_input_chars: usize,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("strategy", &self.strategy.name())
            .field("max_input_chars", &self.max_input_chars)
            .finish()
    }
}

impl Summarizer {
    pub fn new(corpus: &FrequencyCorpus) -> Self {
        Self::with_strategy(select_strategy(corpus))
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let strategy: Arc<dyn TextStrategy> = if config.linguistic {
            select_strategy(FrequencyCorpus::global())
        } else {
            Arc::new(PatternStrategy)
        };
        Self::with_strategy(strategy).with_max_input_chars(config.max_input_chars)
    }

    pub fn with_strategy(strategy: Arc<dyn TextStrategy>) -> Self {
        Self {
            strategy,
            max_input_chars: crate::config::DEFAULT_MAX_INPUT_CHARS,
        }
    }

    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    /// The process-wide summarizer, configured from the environment.
    pub fn global() -> &'static Summarizer {
        &DEFAULT_SUMMARIZER
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// True when the Unicode tokenizer and corpus stop words are in use.
    pub fn is_linguistic(&self) -> bool {
        self.strategy.kind() == StrategyKind::Linguistic
    }

    /// Trimmed text, or `InvalidInput` when empty or over the size cap.
    pub fn validate<'a>(&self, text: &'a str) -> Result<&'a str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SummifyError::InvalidInput("Empty text provided".to_string()));
        }
        if trimmed.chars().count() > self.max_input_chars {
            return Err(SummifyError::InvalidInput(format!(
                "Text too long. Please limit to {} characters.",
                group_thousands(self.max_input_chars)
            )));
        }
        Ok(trimmed)
    }

    /// Validate the request and summarize it.
    pub fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResult> {
        let text = self.validate(&request.text)?;
        debug!("Summarizing {} characters with {}", text.len(), request.algorithm);
        Ok(self.summarize_text(text, request.algorithm, request.max_sentences, request.num_keywords))
    }

    /// Run the pipeline without request validation. Never fails.
    pub fn summarize_text(
        &self,
        text: &str,
        algorithm: Algorithm,
        max_sentences: usize,
        num_keywords: usize,
    ) -> SummaryResult {
        let started = Instant::now();
        let max_sentences = max_sentences.clamp(MAX_SENTENCES_RANGE.0, MAX_SENTENCES_RANGE.1);
        let text = normalize_whitespace(text);

        let (draft, keywords) = if text.is_empty() {
            (Draft::degraded(NO_CONTENT.to_string(), DegradedReason::EmptyText), Vec::new())
        } else if word_count(&text) < MIN_WORDS {
            debug!("Input too short to compress");
            let keywords = self.extract_keywords(&text, num_keywords);
            (Draft::degraded(text.clone(), DegradedReason::TooShort), keywords)
        } else {
            let draft = self.run_chain(&FALLBACK_CHAIN, &text, algorithm, max_sentences);
            let keywords = self.extract_keywords(&text, num_keywords);
            (draft, keywords)
        };

        let summary = if draft.text.trim().is_empty() {
            NO_SUMMARY.to_string()
        } else {
            draft.text
        };
        let elapsed = elapsed_millis(started.elapsed());

        SummaryResult {
            statistics: Statistics::compute(&text, &summary, elapsed),
            summary,
            keywords,
            algorithm_used: algorithm,
            status: draft.status,
        }
    }

    pub fn extract_keywords(&self, text: &str, num_keywords: usize) -> Vec<String> {
        keywords::extract_keywords(self.strategy.as_ref(), text, num_keywords)
    }

    fn run_chain(
        &self,
        chain: &[SummaryStrategy],
        text: &str,
        algorithm: Algorithm,
        max_sentences: usize,
    ) -> Draft {
        for strategy in chain {
            let attempt = match strategy {
                // A strategy supplied through `with_strategy` may panic mid-stage
                SummaryStrategy::Extractive => {
                    panic::catch_unwind(AssertUnwindSafe(|| self.extractive(text, algorithm, max_sentences)))
                        .map_err(StageError::from_panic)
                }
                SummaryStrategy::NaiveSplit => {
                    Ok(Draft::degraded(naive_split_summary(text, max_sentences), DegradedReason::NaiveSplit))
                }
            };
            match attempt {
                Ok(draft) => return draft,
                Err(e) => error!("{:?} summarization failed, trying next strategy: {}", strategy, e),
            }
        }
        Draft::degraded(String::new(), DegradedReason::EmptySelection)
    }

    fn extractive(
        &self,
        text: &str,
        algorithm: Algorithm,
        max_sentences: usize,
    ) -> Draft {
        let sentences = self.strategy.segment_sentences(text);
        debug!("Segmented {} sentences", sentences.len());
        if sentences.len() <= 1 {
            return Draft::degraded(truncate_text(text), DegradedReason::SingleSentence);
        }

        let table = if algorithm.uses_frequency() {
            FrequencyTable::build(self.strategy.tokenize_words(text))
        } else {
            FrequencyTable::default()
        };
        let no_signal = algorithm.uses_frequency() && table.is_empty();
        if no_signal {
            warn!("No qualifying tokens, keeping the leading sentences");
        }

        let scored = score_sentences(&sentences, &table, algorithm, self.strategy.as_ref());
        let indices = select_top(&scored, max_sentences);
        let summary = selected_sentences(&sentences, &indices).join(" ");
        if summary.trim().is_empty() {
            warn!("Selected sentences were blank, truncating instead");
            return Draft::degraded(truncate_text(text), DegradedReason::EmptySelection);
        }

        if no_signal {
            Draft::degraded(summary, DegradedReason::NoFrequencySignal)
        } else {
            Draft::complete(summary)
        }
    }
}

/// Summarize with the process-wide engine.
pub fn summarize(text: &str, algorithm: &str, max_sentences: usize) -> Result<SummaryResult> {
    let request = SummaryRequest::new(text)
        .algorithm(algorithm)
        .max_sentences(max_sentences);
    Summarizer::global().summarize(&request)
}

/// Keywords from the process-wide engine.
pub fn extract_keywords(text: &str, num_keywords: usize) -> Vec<String> {
    Summarizer::global().extract_keywords(text, num_keywords)
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// The text itself when short enough, else its first 200 characters and "...".
fn truncate_text(text: &str) -> String {
    if text.chars().count() <= TRUNCATE_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(TRUNCATE_CHARS).collect();
        format!("{}...", head)
    }
}

/// First `max_sentences` period-delimited fragments, rejoined with periods.
fn naive_split_summary(text: &str, max_sentences: usize) -> String {
    let fragments: Vec<&str> = text.split('.').take(max_sentences).collect();
    format!("{}.", fragments.join("."))
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
