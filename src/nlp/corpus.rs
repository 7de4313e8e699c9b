// Process-wide linguistic corpus.
//
// Holds the English stop-word set used by the linguistic strategy. It is
// loaded at most once per `FrequencyCorpus`; when loading is disabled or the
// toolkit is missing, the corpus settles in `Unavailable` and callers switch
// to the pattern strategy.
use once_cell::sync::{Lazy, OnceCell};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;

static GLOBAL_CORPUS: Lazy<FrequencyCorpus> =
    Lazy::new(|| FrequencyCorpus::new(EngineConfig::from_env().linguistic));

/// Read-only linguistic resources, shared once loaded.
#[derive(Debug)]
pub struct LinguisticCorpus {
    stop_words: HashSet<String>,
}

impl LinguisticCorpus {
    pub fn from_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    /// Expects an already lower-cased word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

/// Outcome of the one-time load.
#[derive(Debug, Clone)]
pub enum CorpusState {
    Ready(Arc<LinguisticCorpus>),
    Unavailable(String),
}

/// Lifecycle as seen from outside, without forcing a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusStatus {
    Uninitialized,
    Ready,
    Unavailable,
}

/// Lazily loaded linguistic corpus guarded by a single-initialization cell.
///
/// Concurrent first callers of [`FrequencyCorpus::load`] block on the same
/// cell: the loader runs exactly once and every caller observes the same
/// final state.
#[derive(Debug)]
pub struct FrequencyCorpus {
    enabled: bool,
    state: OnceCell<CorpusState>,
}

impl FrequencyCorpus {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            state: OnceCell::new(),
        }
    }

    /// The process-wide corpus, configured from the environment on first use.
    pub fn global() -> &'static FrequencyCorpus {
        &GLOBAL_CORPUS
    }

    pub fn status(&self) -> CorpusStatus {
        match self.state.get() {
            None => CorpusStatus::Uninitialized,
            Some(CorpusState::Ready(_)) => CorpusStatus::Ready,
            Some(CorpusState::Unavailable(_)) => CorpusStatus::Unavailable,
        }
    }

    /// Load the corpus if needed and return its settled state.
    pub fn load(&self) -> &CorpusState {
        self.state.get_or_init(|| {
            debug!("Loading linguistic corpus (enabled: {})", self.enabled);
            let state = if self.enabled {
                load_linguistic()
            } else {
                CorpusState::Unavailable("linguistic processing disabled by configuration".to_string())
            };
            match &state {
                CorpusState::Ready(corpus) => {
                    info!("Linguistic corpus ready ({} stop words)", corpus.stop_words.len())
                }
                CorpusState::Unavailable(reason) => {
                    warn!("Linguistic corpus unavailable, using pattern fallbacks: {}", reason)
                }
            }
            state
        })
    }

    pub fn is_available(&self) -> bool {
        matches!(self.load(), CorpusState::Ready(_))
    }

    pub fn linguistic(&self) -> Option<Arc<LinguisticCorpus>> {
        match self.load() {
            CorpusState::Ready(corpus) => Some(Arc::clone(corpus)),
            CorpusState::Unavailable(_) => None,
        }
    }

    /// Why the corpus is unavailable, if it is.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match self.load() {
            CorpusState::Ready(_) => None,
            CorpusState::Unavailable(reason) => Some(reason.as_str()),
        }
    }
}

#[cfg(feature = "linguistic")]
fn load_linguistic() -> CorpusState {
    let words = stop_words::get(stop_words::LANGUAGE::English);
    let corpus = LinguisticCorpus::from_stop_words(words.iter());
    if corpus.stop_words.is_empty() {
        CorpusState::Unavailable("English stop-word list is empty".to_string())
    } else {
        CorpusState::Ready(Arc::new(corpus))
    }
}

#[cfg(not(feature = "linguistic"))]
fn load_linguistic() -> CorpusState {
    CorpusState::Unavailable("built without the `linguistic` feature".to_string())
}
