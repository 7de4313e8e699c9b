// Sentence scoring: frequency, position and hybrid.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::frequency::FrequencyTable;
use super::tokenizer::TextStrategy;

/// Scoring algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Sum of whole-document token counts over the sentence's tokens
    #[default]
    Frequency,
    /// Lead and closing sentences first, then the opening 30%
    Position,
    /// Frequency plus position, unweighted
    Hybrid,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Frequency, Algorithm::Position, Algorithm::Hybrid];

    /// Map caller-supplied names onto an algorithm; anything unrecognized is `Frequency`.
    pub fn normalize(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "position" => Algorithm::Position,
            "hybrid" => Algorithm::Hybrid,
            _ => Algorithm::Frequency,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Frequency => "frequency",
            Algorithm::Position => "position",
            Algorithm::Hybrid => "hybrid",
        }
    }

    /// Whether this algorithm needs a document frequency table.
    pub fn uses_frequency(&self) -> bool {
        !matches!(self, Algorithm::Position)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentence index paired with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredSentence {
    pub index: usize,
    pub score: usize,
}

/// 3 for the first and last sentence, 2 inside the first 30%, 1 otherwise.
pub fn position_score(index: usize, total: usize) -> usize {
    if index == 0 || index + 1 == total {
        3
    } else if (index as f64) < total as f64 * 0.3 {
        2
    } else {
        1
    }
}

/// Sum of the table counts of each token; unknown tokens add nothing.
pub fn frequency_score<S: AsRef<str>>(tokens: &[S], table: &FrequencyTable) -> usize {
    tokens.iter().map(|t| table.get(t.as_ref())).sum()
}

/// Score every sentence. An empty table carries no signal, so frequency and
/// hybrid scores are all zero and selection falls back to document order.
pub fn score_sentences(
    sentences: &[String],
    table: &FrequencyTable,
    algorithm: Algorithm,
    strategy: &dyn TextStrategy,
) -> Vec<ScoredSentence> {
    let total = sentences.len();
    let no_signal = algorithm.uses_frequency() && table.is_empty();

    sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let score = if no_signal {
                0
            } else {
                match algorithm {
                    Algorithm::Frequency => frequency_score(&strategy.tokenize_words(sentence), table),
                    Algorithm::Position => position_score(index, total),
                    Algorithm::Hybrid => {
                        frequency_score(&strategy.tokenize_words(sentence), table)
                            + position_score(index, total)
                    }
                }
            };
            ScoredSentence { index, score }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::PatternStrategy;

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn scores(scored: &[ScoredSentence]) -> Vec<usize> {
        scored.iter().map(|s| s.score).collect()
    }

    #[test]
    fn test_normalize_defaults_unknown_to_frequency() {
        assert_eq!(Algorithm::normalize("position"), Algorithm::Position);
        assert_eq!(Algorithm::normalize(" HYBRID "), Algorithm::Hybrid);
        assert_eq!(Algorithm::normalize("frequency"), Algorithm::Frequency);
        assert_eq!(Algorithm::normalize("banana"), Algorithm::Frequency);
        assert_eq!(Algorithm::normalize(""), Algorithm::Frequency);
    }

    #[test]
    fn test_algorithm_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Algorithm::Hybrid).unwrap(), "\"hybrid\"");
        assert_eq!(Algorithm::Position.to_string(), "position");
    }

    #[test]
    fn test_position_score_bands() {
        // 10 sentences: 0 and 9 are ends, 1..=2 fall inside the first 30%
        let got: Vec<usize> = (0..10).map(|i| position_score(i, 10)).collect();
        assert_eq!(got, vec![3, 2, 2, 1, 1, 1, 1, 1, 1, 3]);
    }

    #[test]
    fn test_frequency_scores_sum_document_counts() {
        let strategy = PatternStrategy;
        let doc = sentences(&["AI is transforming industries", "Healthcare uses AI", "Finance uses AI too"]);
        let table = FrequencyTable::build(doc.iter().flat_map(|s| strategy.tokenize_words(s)));
        let scored = score_sentences(&doc, &table, Algorithm::Frequency, &strategy);
        assert_eq!(scores(&scored), vec![6, 6, 7]);
        assert_eq!(scored[2].index, 2);
    }

    #[test]
    fn test_hybrid_adds_position_to_frequency() {
        let strategy = PatternStrategy;
        let doc = sentences(&["alpha beta", "beta gamma", "gamma delta", "delta alpha"]);
        let table = FrequencyTable::build(doc.iter().flat_map(|s| strategy.tokenize_words(s)));
        let scored = score_sentences(&doc, &table, Algorithm::Hybrid, &strategy);
        // every sentence has frequency 4; positions are 3, 2, 1, 3
        assert_eq!(scores(&scored), vec![7, 6, 5, 7]);
    }

    #[test]
    fn test_position_ignores_table() {
        let doc = sentences(&["a", "b", "c", "d", "e"]);
        let scored = score_sentences(&doc, &FrequencyTable::default(), Algorithm::Position, &PatternStrategy);
        assert_eq!(scores(&scored), vec![3, 2, 1, 1, 3]);
    }

    #[test]
    fn test_empty_table_scores_zero() {
        let doc = sentences(&["first", "second", "third"]);
        let empty = FrequencyTable::default();
        for algorithm in [Algorithm::Frequency, Algorithm::Hybrid] {
            let scored = score_sentences(&doc, &empty, algorithm, &PatternStrategy);
            assert_eq!(scores(&scored), vec![0, 0, 0]);
        }
    }
}
