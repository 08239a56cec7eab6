use clap::ValueEnum;
use tracing::warn;

use crate::stats::{top_k, WordFrequencyEntry};

/// Chart families the analyzer can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    WordCloud,
    Bar,
    Pie,
    Line,
    Scatter,
    Funnel,
    Radar,
}

impl ChartKind {
    pub fn all() -> [ChartKind; 7] {
        [
            ChartKind::WordCloud,
            ChartKind::Bar,
            ChartKind::Pie,
            ChartKind::Line,
            ChartKind::Scatter,
            ChartKind::Funnel,
            ChartKind::Radar,
        ]
    }

    /// How many ranked entries the kind can show before it becomes
    /// unreadable. Radar is the tightest: one axis per word.
    pub fn top_k(&self) -> usize {
        match self {
            ChartKind::WordCloud | ChartKind::Line | ChartKind::Scatter => 20,
            ChartKind::Bar => 15,
            ChartKind::Pie | ChartKind::Funnel => 10,
            ChartKind::Radar => 8,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::WordCloud => "Word Cloud",
            ChartKind::Bar => "Frequency Bars",
            ChartKind::Pie => "Frequency Shares",
            ChartKind::Line => "Frequency Trend",
            ChartKind::Scatter => "Frequency Scatter",
            ChartKind::Funnel => "Frequency Funnel",
            ChartKind::Radar => "Frequency Radar",
        }
    }
}

/// Renderer-agnostic chart description. Each variant carries the ranked
/// `(word, frequency)` pairs it plots, already truncated to the kind's
/// top-K; the radar variant also carries its axis maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartSpec {
    WordCloud { entries: Vec<WordFrequencyEntry> },
    Bar { entries: Vec<WordFrequencyEntry> },
    Pie { entries: Vec<WordFrequencyEntry> },
    Line { entries: Vec<WordFrequencyEntry> },
    Scatter { entries: Vec<WordFrequencyEntry> },
    Funnel { entries: Vec<WordFrequencyEntry> },
    Radar { entries: Vec<WordFrequencyEntry>, axis_max: u32 },
}

impl ChartSpec {
    /// Build a spec of the given kind from the full ranked sequence.
    /// Returns `None` when there is nothing to plot.
    pub fn build(kind: ChartKind, ranked: &[WordFrequencyEntry]) -> Option<ChartSpec> {
        if ranked.is_empty() {
            warn!(
                action = "skip",
                component = "chart",
                kind = ?kind,
                "No frequency data available, chart not built"
            );
            return None;
        }

        let entries = top_k(ranked, kind.top_k()).to_vec();
        let spec = match kind {
            ChartKind::WordCloud => ChartSpec::WordCloud { entries },
            ChartKind::Bar => ChartSpec::Bar { entries },
            ChartKind::Pie => ChartSpec::Pie { entries },
            ChartKind::Line => ChartSpec::Line { entries },
            ChartKind::Scatter => ChartSpec::Scatter { entries },
            ChartKind::Funnel => ChartSpec::Funnel { entries },
            ChartKind::Radar => {
                // ranked is sorted descending, so the first entry carries
                // the largest frequency and with it the axis scale.
                let axis_max = entries[0].frequency;
                ChartSpec::Radar { entries, axis_max }
            }
        };

        Some(spec)
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSpec::WordCloud { .. } => ChartKind::WordCloud,
            ChartSpec::Bar { .. } => ChartKind::Bar,
            ChartSpec::Pie { .. } => ChartKind::Pie,
            ChartSpec::Line { .. } => ChartKind::Line,
            ChartSpec::Scatter { .. } => ChartKind::Scatter,
            ChartSpec::Funnel { .. } => ChartKind::Funnel,
            ChartSpec::Radar { .. } => ChartKind::Radar,
        }
    }

    pub fn entries(&self) -> &[WordFrequencyEntry] {
        match self {
            ChartSpec::WordCloud { entries }
            | ChartSpec::Bar { entries }
            | ChartSpec::Pie { entries }
            | ChartSpec::Line { entries }
            | ChartSpec::Scatter { entries }
            | ChartSpec::Funnel { entries }
            | ChartSpec::Radar { entries, .. } => entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(count: usize) -> Vec<WordFrequencyEntry> {
        (0..count)
            .map(|i| WordFrequencyEntry {
                word: format!("word{i}"),
                frequency: (count - i) as u32,
            })
            .collect()
    }

    #[test]
    fn test_empty_ranking_builds_no_chart() {
        for kind in ChartKind::all() {
            assert_eq!(ChartSpec::build(kind, &[]), None);
        }
    }

    #[test]
    fn test_each_kind_truncates_to_its_top_k() {
        let entries = ranked(30);
        for kind in ChartKind::all() {
            let spec = ChartSpec::build(kind, &entries).unwrap();
            assert_eq!(spec.entries().len(), kind.top_k());
            assert_eq!(spec.kind(), kind);
        }
    }

    #[test]
    fn test_truncation_is_a_prefix_of_the_ranking() {
        let entries = ranked(30);
        let spec = ChartSpec::build(ChartKind::Bar, &entries).unwrap();
        assert_eq!(spec.entries(), &entries[..15]);
    }

    #[test]
    fn test_short_ranking_is_kept_whole() {
        let entries = ranked(3);
        for kind in ChartKind::all() {
            let spec = ChartSpec::build(kind, &entries).unwrap();
            assert_eq!(spec.entries(), entries.as_slice());
        }
    }

    #[test]
    fn test_radar_axis_max_is_the_top_frequency() {
        let entries = ranked(12);
        match ChartSpec::build(ChartKind::Radar, &entries).unwrap() {
            ChartSpec::Radar { entries, axis_max } => {
                assert_eq!(axis_max, 12);
                assert_eq!(entries.len(), 8);
            }
            other => panic!("expected radar spec, got {other:?}"),
        }
    }
}
