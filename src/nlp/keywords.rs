// Frequency-based keyword extraction.
use super::frequency::FrequencyTable;
use super::tokenizer::TextStrategy;

/// Keyword candidates shorter than this are ignored.
const MIN_KEYWORD_LEN: usize = 4;

/// The `k` most frequent content words of `text`, most frequent first.
///
/// Stop words and words under four characters are excluded. Degenerate input
/// yields an empty list.
pub fn extract_keywords(strategy: &dyn TextStrategy, text: &str, k: usize) -> Vec<String> {
    if k == 0 || text.trim().is_empty() {
        return Vec::new();
    }

    let table = FrequencyTable::build_filtered(
        strategy.keyword_tokens(text),
        MIN_KEYWORD_LEN,
        Some(strategy.stop_words()),
    );

    table
        .most_common(k)
        .into_iter()
        .map(|(word, _)| word.to_string())
        .collect()
}
