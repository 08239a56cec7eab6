use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Built-in stop-word list compiled into the binary.
const DEFAULT_STOP_WORDS: &str = include_str!("../default_stop_words.txt");

/// Name of the working-directory stop-word file picked up when no explicit
/// path is given.
pub const STOP_WORD_FILE: &str = "stop_words.txt";

/// Load the stop-word set, one word per line, trimmed; blank lines and `#`
/// comments are skipped.
///
/// Resolution order: an explicitly requested file (missing is a configuration
/// error), then `stop_words.txt` in the working directory, then the embedded
/// defaults.
pub fn load_stop_words(stop_word_path: Option<&Path>) -> Result<HashSet<String>> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "stop_word_loading",
        "Starting stop-word loading"
    );

    let words;

    if let Some(path) = stop_word_path {
        info!(action = "load", component = "stop_word_file", file_path = ?path, "Loading stop words from specified file");
        if !path.exists() {
            anyhow::bail!("Stop-word file not found: {:?}", path);
        }
        let content = fs::read_to_string(path)?;
        words = parse_stop_words(&content);
        info!(action = "loaded", component = "stop_word_file", word_count = words.len(), file_path = ?path, "Loaded stop words from file");
    } else {
        let default_file = Path::new(STOP_WORD_FILE);
        if default_file.exists() {
            info!(action = "load", component = "default_stop_word_file", file_path = ?default_file, "Loading stop words from default file");
            let content = fs::read_to_string(default_file)?;
            words = parse_stop_words(&content);
            info!(action = "loaded", component = "default_stop_word_file", word_count = words.len(), file_path = ?default_file, "Loaded stop words from default file");
        } else {
            info!(
                action = "load",
                component = "embedded_stop_words",
                "Using embedded default stop words"
            );
            words = parse_stop_words(DEFAULT_STOP_WORDS);
            info!(
                action = "loaded",
                component = "embedded_stop_words",
                word_count = words.len(),
                "Loaded embedded default stop words"
            );
        }
    }

    let load_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "stop_word_loading",
        word_count = words.len(),
        duration_ms = load_time.as_millis(),
        "Stop words ready"
    );
    Ok(words)
}

fn parse_stop_words(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Write the embedded default list to `stop_words.txt` so it can be edited.
pub fn init_default_stop_words() -> Result<()> {
    let default_file = Path::new(STOP_WORD_FILE);

    if default_file.exists() {
        anyhow::bail!(
            "stop_words.txt already exists. Remove it first if you want to reinitialize."
        );
    }

    fs::write(default_file, DEFAULT_STOP_WORDS)?;
    println!("Created stop_words.txt with the built-in stop-word list");

    Ok(())
}
