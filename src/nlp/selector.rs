// Top-k sentence selection that preserves document order.
use std::collections::HashSet;

use super::scorer::ScoredSentence;

/// Indices of the `k` best-scored sentences, in document order.
///
/// Ranking is a stable descending sort, so equal scores favour earlier
/// sentences. Membership is by index: two sentences with identical text are
/// still separate candidates.
pub fn select_top(scored: &[ScoredSentence], k: usize) -> Vec<usize> {
    let mut ranked: Vec<&ScoredSentence> = scored.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let keep: HashSet<usize> = ranked.into_iter().take(k).map(|s| s.index).collect();

    scored
        .iter()
        .filter(|s| keep.contains(&s.index))
        .map(|s| s.index)
        .collect()
}

/// Resolve selected indices back to sentence text.
pub fn selected_sentences<'a>(sentences: &'a [String], indices: &[usize]) -> Vec<&'a str> {
    indices
        .iter()
        .filter_map(|&i| sentences.get(i).map(String::as_str))
        .collect()
}
