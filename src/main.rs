use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use wordscope::chart::{ChartKind, ChartSpec};
use wordscope::pipeline::AnalysisRequest;
use wordscope::{pipeline, render, stopwords, utils, Args, Fetcher, Tokenizer};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    if args.init_stop_words {
        return stopwords::init_default_stop_words();
    }

    utils::validate_args(&args)?;

    let stop_words = if args.no_stop_words {
        HashSet::new()
    } else {
        stopwords::load_stop_words(args.stop_words.as_deref())?
    };
    let tokenizer = Tokenizer::new(stop_words);
    let fetcher = Fetcher::new(Duration::from_secs(args.timeout))?;

    let request = AnalysisRequest::from_args(&args);
    match pipeline::analyze(&request, &fetcher, &tokenizer) {
        Ok(result) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                pipeline::print_analysis_results(&result, &args);
            }

            if let Some(output) = &args.output {
                let kinds: Vec<ChartKind> = if args.full_report {
                    ChartKind::all().to_vec()
                } else {
                    vec![request.chart]
                };
                let specs: Vec<ChartSpec> = kinds
                    .iter()
                    .filter_map(|kind| ChartSpec::build(*kind, &result.entries))
                    .collect();
                render::write_report(output, &result, &specs)?;
                println!("\nReport written to {}", output.display());
            }

            Ok(())
        }
        Err(e) => {
            error!(
                action = "fail",
                component = "analysis",
                url = %request.url,
                error = %e,
                "Analysis failed"
            );
            std::process::exit(1);
        }
    }
}
