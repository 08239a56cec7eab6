use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(time::macros::format_description!(
            "[hour]:[minute]:[second]"
        )))
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_number(num: u32) -> String {
    num.to_string()
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if !args.init_stop_words {
        match &args.url {
            None => anyhow::bail!("A URL to analyze is required"),
            Some(url) if url.trim().is_empty() => {
                anyhow::bail!("The URL must not be empty")
            }
            Some(_) => {}
        }
    }

    if !(1..=10).contains(&args.min_frequency) {
        anyhow::bail!("--min-frequency must be between 1 and 10");
    }

    if args.top == 0 {
        anyhow::bail!("--top must be greater than 0");
    }

    if args.timeout == 0 {
        anyhow::bail!("--timeout must be greater than 0");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;
    use clap::Parser;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(1), "1");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_validate_accepts_plain_invocation() {
        let args = Args::parse_from(["wordscope", "https://example.com"]);
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_requires_a_url() {
        let args = Args::parse_from(["wordscope"]);
        let err = validate_args(&args).unwrap_err();
        assert!(err.to_string().contains("URL"));
    }

    #[test]
    fn test_validate_rejects_an_empty_url() {
        let args = Args::parse_from(["wordscope", "  "]);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_init_stop_words_needs_no_url() {
        let args = Args::parse_from(["wordscope", "--init-stop-words"]);
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_bounds_min_frequency() {
        for bad in ["0", "11"] {
            let args =
                Args::parse_from(["wordscope", "https://example.com", "--min-frequency", bad]);
            assert!(validate_args(&args).is_err());
        }
        for good in ["1", "10"] {
            let args =
                Args::parse_from(["wordscope", "https://example.com", "--min-frequency", good]);
            assert!(validate_args(&args).is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_zero_top_and_timeout() {
        let args = Args::parse_from(["wordscope", "https://example.com", "--top", "0"]);
        assert!(validate_args(&args).is_err());

        let args = Args::parse_from(["wordscope", "https://example.com", "--timeout", "0"]);
        assert!(validate_args(&args).is_err());
    }
}
