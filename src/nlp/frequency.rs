// Word frequency model: raw occurrence counts over a token stream.
use std::collections::{HashMap, HashSet};

/// Token -> occurrence count, remembering the order tokens were first seen.
///
/// First-seen order is what breaks ties in [`FrequencyTable::most_common`].
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyTable {
    /// Count every token as-is. Case folding is the tokenizer's job.
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for token in tokens {
            table.add(token.as_ref());
        }
        table
    }

    /// Count tokens of at least `min_len` characters that are not in `stop_words`.
    pub fn build_filtered<I, S>(tokens: I, min_len: usize, stop_words: Option<&HashSet<String>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for token in tokens {
            let token = token.as_ref();
            if token.chars().count() < min_len {
                continue;
            }
            if stop_words.is_some_and(|sw| sw.contains(token)) {
                continue;
            }
            table.add(token);
        }
        table
    }

    fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
                self.order.push(token.to_string());
            }
        }
    }

    /// Count for `token`, 0 when absent.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The `k` most frequent tokens, most frequent first.
    pub fn most_common(&self, k: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .order
            .iter()
            .map(|t| (t.as_str(), self.get(t)))
            .collect();
        // sort_by is stable, so equal counts keep first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_counts_raw_occurrences() {
        let table = FrequencyTable::build(["ai", "uses", "ai", "finance"]);
        assert_eq!(table.get("ai"), 2);
        assert_eq!(table.get("uses"), 1);
        assert_eq!(table.get("missing"), 0);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_empty_stream_yields_empty_table() {
        let table = FrequencyTable::build(Vec::<String>::new());
        assert!(table.is_empty());
        assert!(table.most_common(5).is_empty());
    }

    #[test]
    fn test_most_common_breaks_ties_by_first_seen() {
        let table = FrequencyTable::build(["zebra", "apple", "zebra", "apple", "mango"]);
        assert_eq!(
            table.most_common(3),
            vec![("zebra", 2), ("apple", 2), ("mango", 1)]
        );
        assert_eq!(table.most_common(1), vec![("zebra", 2)]);
    }

    #[test]
    fn test_build_filtered_drops_short_and_stop_words() {
        let stop: HashSet<String> = ["there".to_string()].into_iter().collect();
        let table = FrequencyTable::build_filtered(["cat", "there", "river", "river"], 4, Some(&stop));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("river"), 2);
        assert_eq!(table.get("cat"), 0);
    }
}
