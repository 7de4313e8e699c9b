// NLP engine for Summify
pub mod corpus;
pub mod frequency;
pub mod keywords;
pub mod scorer;
pub mod selector;
pub mod summarization;
pub mod tokenizer;

pub use corpus::{CorpusStatus, FrequencyCorpus};
pub use scorer::Algorithm;
pub use summarization::{summarize, extract_keywords, Summarizer, SummaryRequest, SummaryResult};
