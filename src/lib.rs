pub mod args;
pub mod chart;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod render;
pub mod stats;
pub mod stopwords;
pub mod tokenize;
pub mod utils;

pub use args::Args;
pub use chart::{ChartKind, ChartSpec};
pub use error::AnalysisError;
pub use fetch::Fetcher;
pub use pipeline::{analyze, print_analysis_results, AnalysisRequest};
pub use stats::{AnalysisResult, WordFrequencyEntry, WordStats};
pub use stopwords::{init_default_stop_words, load_stop_words};
pub use tokenize::Tokenizer;
