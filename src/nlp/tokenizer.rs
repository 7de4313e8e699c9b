// Sentence segmentation and word tokenization.
//
// Two interchangeable strategies sit behind `TextStrategy`: the linguistic one
// (Unicode boundary rules + stop-word corpus) and the pattern one (regex only).
// The choice is made once, from corpus availability, by `select_strategy`.
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

#[cfg(feature = "linguistic")]
use super::corpus::LinguisticCorpus;
use super::corpus::FrequencyCorpus;
#[cfg(feature = "linguistic")]
use unicode_segmentation::UnicodeSegmentation;

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static LETTER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]+\b").unwrap());

static KEYWORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]{4,}\b").unwrap());

// High-frequency function words excluded from keywords when no corpus is loaded
static COMMON_WORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    [
        "this", "that", "with", "have", "will", "from", "they", "been", "were", "said",
        "each", "which", "their", "time", "more", "very", "what", "know", "just", "first",
        "into", "over", "think", "also", "your", "work", "life", "only", "can", "still",
        "should", "after", "being", "now", "made", "before", "here", "through", "when",
        "where", "much", "some", "these", "many", "would", "there",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Linguistic,
    Pattern,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Linguistic => "linguistic",
            StrategyKind::Pattern => "pattern",
        }
    }
}

/// Tokenization capability used by the summarization pipeline.
pub trait TextStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Split text into trimmed, non-empty sentences in document order.
    fn segment_sentences(&self, text: &str) -> Vec<String>;

    /// Lower-cased tokens used for frequency modelling and sentence scoring.
    fn tokenize_words(&self, text: &str) -> Vec<String>;

    /// Lower-cased keyword candidates before length and stop-word filtering.
    fn keyword_tokens(&self, text: &str) -> Vec<String>;

    /// Words excluded from keyword ranking.
    fn stop_words(&self) -> &HashSet<String>;
}

/// Pick the linguistic strategy when the corpus is available, the pattern one otherwise.
pub fn select_strategy(corpus: &FrequencyCorpus) -> Arc<dyn TextStrategy> {
    match corpus.linguistic() {
        #[cfg(feature = "linguistic")]
        Some(linguistic) => Arc::new(LinguisticStrategy::new(linguistic)),
        _ => Arc::new(PatternStrategy),
    }
}

/// Regex-only fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternStrategy;

impl TextStrategy for PatternStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Pattern
    }

    fn segment_sentences(&self, text: &str) -> Vec<String> {
        SENTENCE_BOUNDARY
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    fn tokenize_words(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        LETTER_RUN
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn keyword_tokens(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        KEYWORD_RUN
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn stop_words(&self) -> &HashSet<String> {
        &COMMON_WORDS
    }
}

/// Unicode (UAX #29) sentence and word boundaries plus the corpus stop-word set.
#[cfg(feature = "linguistic")]
#[derive(Debug, Clone)]
pub struct LinguisticStrategy {
    corpus: Arc<LinguisticCorpus>,
}

#[cfg(feature = "linguistic")]
impl LinguisticStrategy {
    pub fn new(corpus: Arc<LinguisticCorpus>) -> Self {
        Self { corpus }
    }

    fn alphanumeric_words(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split_word_bounds()
            .filter(|w| !w.is_empty() && w.chars().all(char::is_alphanumeric))
            .map(str::to_lowercase)
    }
}

#[cfg(feature = "linguistic")]
impl TextStrategy for LinguisticStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Linguistic
    }

    fn segment_sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    /// Scoring tokens exclude corpus stop words as well, so "the" and "and" never
    /// lift a sentence. The pattern strategy scores every letter run.
    fn tokenize_words(&self, text: &str) -> Vec<String> {
        Self::alphanumeric_words(text)
            .filter(|w| !self.corpus.is_stop_word(w))
            .collect()
    }

    fn keyword_tokens(&self, text: &str) -> Vec<String> {
        Self::alphanumeric_words(text).collect()
    }

    fn stop_words(&self) -> &HashSet<String> {
        self.corpus.stop_words()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_sentences_split_on_punctuation_runs() {
        let sentences = PatternStrategy.segment_sentences("Wait... what?! Yes. ");
        assert_eq!(sentences, vec!["Wait", "what", "Yes"]);
    }

    #[test]
    fn test_pattern_sentences_drop_blank_fragments() {
        assert!(PatternStrategy.segment_sentences(" ... !! ").is_empty());
        assert_eq!(PatternStrategy.segment_sentences("no boundary here"), vec!["no boundary here"]);
    }

    #[test]
    fn test_pattern_words_are_lowercase_letter_runs() {
        let tokens = PatternStrategy.tokenize_words("AI uses GPU-2 chips, don't it?");
        assert_eq!(tokens, vec!["ai", "uses", "gpu", "chips", "don", "t", "it"]);
    }

    #[test]
    fn test_pattern_keyword_tokens_need_four_letters() {
        let tokens = PatternStrategy.keyword_tokens("The cat sat on Mars with zebras");
        assert_eq!(tokens, vec!["mars", "with", "zebras"]);
        assert!(PatternStrategy.stop_words().contains("with"));
    }

    #[test]
    fn test_select_strategy_falls_back_to_pattern() {
        let corpus = FrequencyCorpus::new(false);
        let strategy = select_strategy(&corpus);
        assert_eq!(strategy.kind(), StrategyKind::Pattern);
        assert_eq!(strategy.name(), "pattern");
    }

    #[cfg(feature = "linguistic")]
    mod linguistic {
        use crate::nlp::corpus::{FrequencyCorpus, LinguisticCorpus};
        use crate::nlp::tokenizer::{select_strategy, LinguisticStrategy, StrategyKind, TextStrategy};
        use std::sync::Arc;

        fn strategy() -> LinguisticStrategy {
            LinguisticStrategy::new(Arc::new(LinguisticCorpus::from_stop_words([
                "the", "is", "a", "and",
            ])))
        }

        #[test]
        fn test_sentences_keep_terminal_punctuation() {
            let sentences = strategy().segment_sentences("The sky is blue. Is grass green? Yes!");
            assert_eq!(sentences, vec!["The sky is blue.", "Is grass green?", "Yes!"]);
        }

        #[test]
        fn test_tokenize_words_filters_stop_words_and_punctuation() {
            let tokens = strategy().tokenize_words("The Model is fast, and accurate.");
            assert_eq!(tokens, vec!["model", "fast", "accurate"]);
        }

        #[test]
        fn test_keyword_tokens_keep_alphanumeric_words() {
            let tokens = strategy().keyword_tokens("Rust 2021 edition, the best!");
            assert_eq!(tokens, vec!["rust", "2021", "edition", "the", "best"]);
        }

        #[test]
        fn test_select_strategy_prefers_linguistic() {
            let corpus = FrequencyCorpus::new(true);
            let strategy = select_strategy(&corpus);
            assert_eq!(strategy.kind(), StrategyKind::Linguistic);
            assert_eq!(strategy.name(), "linguistic");
        }
    }
}
