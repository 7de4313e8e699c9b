// Engine configuration, read from the environment with CLI overrides on top.
use tracing::warn;

use crate::nlp::scorer::Algorithm;

pub const DEFAULT_MAX_INPUT_CHARS: usize = 100_000;
pub const DEFAULT_MAX_SENTENCES: usize = 3;
pub const DEFAULT_NUM_KEYWORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Try to load the linguistic corpus. When false the pattern strategy is used.
    pub linguistic: bool,
    /// Inputs longer than this many characters are rejected.
    pub max_input_chars: usize,
    pub algorithm: Algorithm,
    pub max_sentences: usize,
    pub num_keywords: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            linguistic: true,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            algorithm: Algorithm::Frequency,
            max_sentences: DEFAULT_MAX_SENTENCES,
            num_keywords: DEFAULT_NUM_KEYWORDS,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys keep their
    /// defaults; unparsable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("SUMMIFY_LINGUISTIC") {
            match parse_flag(&v) {
                Some(flag) => config.linguistic = flag,
                None => warn!("Ignoring SUMMIFY_LINGUISTIC={:?}: expected a boolean", v),
            }
        }
        if let Some(v) = lookup("SUMMIFY_MAX_INPUT_CHARS") {
            match v.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.max_input_chars = n,
                _ => warn!("Ignoring SUMMIFY_MAX_INPUT_CHARS={:?}", v),
            }
        }
        if let Some(v) = lookup("SUMMIFY_ALGORITHM") {
            config.algorithm = Algorithm::normalize(&v);
        }
        if let Some(v) = lookup("SUMMIFY_MAX_SENTENCES") {
            match v.trim().parse::<usize>() {
                Ok(n) => config.max_sentences = n,
                Err(_) => warn!("Ignoring SUMMIFY_MAX_SENTENCES={:?}", v),
            }
        }
        if let Some(v) = lookup("SUMMIFY_NUM_KEYWORDS") {
            match v.trim().parse::<usize>() {
                Ok(n) => config.num_keywords = n,
                Err(_) => warn!("Ignoring SUMMIFY_NUM_KEYWORDS={:?}", v),
            }
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = EngineConfig::from_lookup(|_| None);
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.max_input_chars, 100_000);
        assert_eq!(config.max_sentences, 3);
        assert_eq!(config.num_keywords, 10);
    }

    #[test]
    fn test_environment_overrides() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("SUMMIFY_LINGUISTIC", "off"),
            ("SUMMIFY_MAX_INPUT_CHARS", "5000"),
            ("SUMMIFY_ALGORITHM", "Hybrid"),
            ("SUMMIFY_MAX_SENTENCES", "5"),
            ("SUMMIFY_NUM_KEYWORDS", "4"),
        ]));
        assert!(!config.linguistic);
        assert_eq!(config.max_input_chars, 5000);
        assert_eq!(config.algorithm, Algorithm::Hybrid);
        assert_eq!(config.max_sentences, 5);
        assert_eq!(config.num_keywords, 4);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("SUMMIFY_LINGUISTIC", "maybe"),
            ("SUMMIFY_MAX_INPUT_CHARS", "0"),
            ("SUMMIFY_ALGORITHM", "banana"),
            ("SUMMIFY_MAX_SENTENCES", "lots"),
        ]));
        assert!(config.linguistic);
        assert_eq!(config.max_input_chars, DEFAULT_MAX_INPUT_CHARS);
        assert_eq!(config.algorithm, Algorithm::Frequency);
        assert_eq!(config.max_sentences, DEFAULT_MAX_SENTENCES);
    }
}
