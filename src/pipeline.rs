use std::time::Instant;
use tracing::info;

use crate::error::AnalysisError;
use crate::fetch::Fetcher;
use crate::stats::{count_tokens, AnalysisResult};
use crate::tokenize::Tokenizer;
use crate::{chart::ChartKind, extract, Args};

/// One user interaction: what to analyze and how to display it.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub url: String,
    pub min_frequency: u32,
    pub chart: ChartKind,
}

impl AnalysisRequest {
    /// URL presence is enforced by argument validation before the pipeline
    /// runs, so a missing value only ever yields an empty request here.
    pub fn from_args(args: &Args) -> Self {
        AnalysisRequest {
            url: args.url.clone().unwrap_or_default(),
            min_frequency: args.min_frequency,
            chart: args.chart,
        }
    }
}

/// Run the full analysis: fetch the page, extract its text, tokenize, and
/// count word frequencies. Fails early at whichever stage breaks.
pub fn analyze(
    request: &AnalysisRequest,
    fetcher: &Fetcher,
    tokenizer: &Tokenizer,
) -> Result<AnalysisResult, AnalysisError> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "pipeline",
        url = %request.url,
        min_frequency = request.min_frequency,
        "Starting page analysis"
    );

    let html = fetcher.fetch_text(&request.url)?;

    let text = extract::extract_text(&html);
    if text.is_empty() {
        return Err(AnalysisError::EmptyContent {
            url: request.url.clone(),
        });
    }
    let text_chars = text.chars().count();
    info!(
        action = "extract",
        component = "pipeline",
        html_bytes = html.len(),
        text_chars = text_chars,
        "Text extracted from page"
    );

    let tokens = tokenizer.tokenize(&text);
    let stats = count_tokens(&tokens, request.min_frequency);
    if stats.is_empty() {
        return Err(AnalysisError::NoFrequencyData {
            min_frequency: request.min_frequency,
        });
    }

    let entries = stats.ranked_entries();

    let total_time = total_start_time.elapsed();
    info!(
        action = "complete",
        component = "pipeline",
        url = %request.url,
        distinct_words = entries.len(),
        duration_ms = total_time.as_millis(),
        "Analysis completed successfully"
    );

    Ok(AnalysisResult {
        url: request.url.clone(),
        text_chars,
        stats,
        entries,
    })
}

pub fn print_analysis_results(result: &AnalysisResult, args: &Args) {
    println!("\n--- Word Frequency Analysis ---");
    println!("Source: {}", result.url);
    println!(
        "Characters extracted: {}",
        crate::utils::format_number(result.text_chars as u32)
    );
    println!(
        "Tokens counted: {}",
        crate::utils::format_number(result.stats.total_tokens)
    );
    println!(
        "Distinct words kept: {}",
        crate::utils::format_number(result.stats.distinct_words() as u32)
    );
    println!(
        "Words below frequency threshold: {}",
        crate::utils::format_number(result.stats.below_min_frequency)
    );

    println!(
        "\nTop {} words:",
        std::cmp::min(args.top, result.entries.len())
    );
    for entry in result.entries.iter().take(args.top) {
        println!(
            "- {}: {} occurrences",
            entry.word,
            crate::utils::format_number(entry.frequency)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_request_carries_the_parsed_arguments() {
        let args = Args::parse_from([
            "wordscope",
            "https://example.com/post",
            "--min-frequency",
            "3",
            "--chart",
            "bar",
        ]);
        let request = AnalysisRequest::from_args(&args);
        assert_eq!(request.url, "https://example.com/post");
        assert_eq!(request.min_frequency, 3);
        assert_eq!(request.chart, ChartKind::Bar);
    }

    #[test]
    fn test_request_defaults() {
        let args = Args::parse_from(["wordscope", "https://example.com"]);
        let request = AnalysisRequest::from_args(&args);
        assert_eq!(request.min_frequency, 2);
        assert_eq!(request.chart, ChartKind::WordCloud);
    }
}
