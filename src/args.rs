use clap::Parser;
use std::path::PathBuf;

use crate::chart::ChartKind;

#[derive(Parser, Debug)]
#[command(
    name = "wordscope",
    about = "Fetch a web page and chart the frequency of the words it contains",
    version,
    long_about = None
)]
pub struct Args {
    /// URL of the page to analyze
    pub url: Option<String>,

    /// Minimum occurrences a word needs to be counted (1-10)
    #[arg(short, long, default_value_t = 2)]
    pub min_frequency: u32,

    /// Chart to render into the report
    #[arg(short, long, value_enum, default_value = "word-cloud")]
    pub chart: ChartKind,

    /// Render every chart kind into the report instead of just one
    #[arg(long)]
    pub full_report: bool,

    /// Number of top words to display
    #[arg(short, long, default_value_t = 20)]
    pub top: usize,

    /// Path to a custom stop-word file (one word per line)
    #[arg(short, long)]
    pub stop_words: Option<PathBuf>,

    /// Disable stop-word filtering
    #[arg(long)]
    pub no_stop_words: bool,

    /// Initialize stop_words.txt with the built-in list
    #[arg(long)]
    pub init_stop_words: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Write an HTML report with the selected chart(s) to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the analysis result as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
