use indexmap::IndexMap;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// Word-to-count mapping in first-occurrence order, so ranking ties resolve
/// deterministically under a stable sort.
pub type FrequencyTable = IndexMap<String, u32>;

/// One ranked entry of the analysis result. `frequency` is always at least
/// the minimum the aggregation was run with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequencyEntry {
    pub word: String,
    pub frequency: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordStats {
    #[serde(skip)]
    pub word_counts: FrequencyTable,
    pub total_tokens: u32,
    pub below_min_frequency: u32,
}

impl WordStats {
    pub fn distinct_words(&self) -> usize {
        self.word_counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_counts.is_empty()
    }

    /// Entries sorted by frequency, highest first. The sort is stable, so
    /// equal frequencies keep their first-occurrence order.
    pub fn ranked_entries(&self) -> Vec<WordFrequencyEntry> {
        let mut entries: Vec<WordFrequencyEntry> = self
            .word_counts
            .iter()
            .map(|(word, count)| WordFrequencyEntry {
                word: word.clone(),
                frequency: *count,
            })
            .collect();
        entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        entries
    }
}

/// Count token occurrences and drop words seen fewer than `min_frequency`
/// times. Words are recorded in order of first appearance.
pub fn count_tokens(tokens: &[&str], min_frequency: u32) -> WordStats {
    let start_time = Instant::now();

    let mut word_counts: FrequencyTable = IndexMap::new();
    for token in tokens {
        *word_counts.entry((*token).to_string()).or_insert(0) += 1;
    }

    let distinct_before = word_counts.len();
    word_counts.retain(|_, count| *count >= min_frequency);
    let below_min_frequency = (distinct_before - word_counts.len()) as u32;

    let count_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "aggregate",
        total_tokens = tokens.len(),
        distinct_words = word_counts.len(),
        below_min_frequency = below_min_frequency,
        duration_ms = count_time.as_millis(),
        "Token counting completed"
    );

    WordStats {
        word_counts,
        total_tokens: tokens.len() as u32,
        below_min_frequency,
    }
}

/// View of the `k` highest-frequency entries. A plain prefix slice: the
/// ranking is already sorted, so truncation can never reorder it.
pub fn top_k(entries: &[WordFrequencyEntry], k: usize) -> &[WordFrequencyEntry] {
    let end = k.min(entries.len());
    debug!(
        action = "view",
        component = "aggregate",
        requested = k,
        returned = end,
        "Top-K view taken"
    );
    &entries[..end]
}

/// Everything one analysis run produced, ready for console output, JSON
/// export, or report rendering. `entries` is the full ranked sequence.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub url: String,
    pub text_chars: usize,
    pub stats: WordStats,
    pub entries: Vec<WordFrequencyEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_counts_repeated_words() {
        let tokens = vec!["苹果", "苹果", "苹果", "香蕉"];
        let stats = count_tokens(&tokens, 2);
        assert_eq!(stats.word_counts.get("苹果"), Some(&3));
        assert_eq!(stats.word_counts.get("香蕉"), None);
        assert_eq!(stats.distinct_words(), 1);
        assert_eq!(stats.below_min_frequency, 1);
        assert_eq!(stats.total_tokens, 4);
    }

    #[test]
    fn test_count_equal_to_minimum_survives() {
        let tokens = vec!["apple", "apple", "banana"];
        let stats = count_tokens(&tokens, 2);
        assert_eq!(stats.word_counts.get("apple"), Some(&2));
    }

    #[test]
    fn test_threshold_above_every_count_empties_the_table() {
        let tokens = vec!["apple", "banana", "cherry"];
        let stats = count_tokens(&tokens, 5);
        assert!(stats.is_empty());
        assert_eq!(stats.below_min_frequency, 3);
    }

    #[test]
    fn test_minimum_of_one_keeps_everything() {
        let tokens = vec!["apple", "banana"];
        let stats = count_tokens(&tokens, 1);
        assert_eq!(stats.distinct_words(), 2);
        assert_eq!(stats.below_min_frequency, 0);
    }

    #[test]
    fn test_ranking_is_non_increasing() {
        let tokens = vec![
            "red", "red", "red", "green", "green", "blue", "blue", "blue", "blue", "gray", "gray",
        ];
        let stats = count_tokens(&tokens, 1);
        let entries = stats.ranked_entries();
        for pair in entries.windows(2) {
            assert!(pair[0].frequency >= pair[1].frequency);
        }
        assert_eq!(entries[0].word, "blue");
        assert_eq!(entries[0].frequency, 4);
    }

    #[test]
    fn test_equal_frequencies_form_the_expected_set() {
        let tokens = vec!["alpha", "beta", "gamma", "alpha", "beta", "gamma"];
        let stats = count_tokens(&tokens, 1);
        let entries = stats.ranked_entries();
        let words: HashSet<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, HashSet::from(["alpha", "beta", "gamma"]));
        assert!(entries.iter().all(|e| e.frequency == 2));
    }

    #[test]
    fn test_top_k_is_a_prefix_view() {
        let tokens = vec![
            "one", "two", "two", "three", "three", "three", "four", "four", "four", "four",
        ];
        let stats = count_tokens(&tokens, 1);
        let entries = stats.ranked_entries();
        for k in 0..=entries.len() {
            assert_eq!(top_k(&entries, k), &entries[..k]);
        }
    }

    #[test]
    fn test_top_k_beyond_length_returns_all() {
        let tokens = vec!["only", "only"];
        let stats = count_tokens(&tokens, 1);
        let entries = stats.ranked_entries();
        assert_eq!(top_k(&entries, 100).len(), 1);
    }
}
