//! ECharts presentation edge: maps chart specs to option objects and
//! assembles the standalone HTML report.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::Local;
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde_json::{json, Value};
use tracing::info;

use crate::chart::{ChartKind, ChartSpec};
use crate::error::AnalysisError;
use crate::stats::{top_k, AnalysisResult, WordFrequencyEntry};

/// Rows shown in the report's ranking table.
const REPORT_TABLE_ROWS: usize = 20;

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";
const WORDCLOUD_CDN: &str =
    "https://cdn.jsdelivr.net/npm/echarts-wordcloud@2/dist/echarts-wordcloud.min.js";

const REPORT_CSS: &str = r#"
body {
  font-family: "Helvetica Neue", Arial, "PingFang SC", "Microsoft YaHei", sans-serif;
  margin: 0 auto; max-width: 960px; padding: 24px; color: #202124;
}
h1 { font-size: 22px; margin-bottom: 4px; }
.meta { color: #5f6368; font-size: 13px; margin-bottom: 20px; }
.meta a { color: #1a73e8; text-decoration: none; word-break: break-all; }
.summary {
  background: #f1f3f4; border-radius: 8px; padding: 12px 16px;
  font-size: 14px; margin-bottom: 24px;
}
table { border-collapse: collapse; width: 100%; margin-bottom: 32px; }
th, td { border: 1px solid #dadce0; padding: 6px 12px; font-size: 14px; }
th { background: #f1f3f4; text-align: left; }
td.count { text-align: right; font-variant-numeric: tabular-nums; }
.chart { width: 100%; height: 480px; margin-bottom: 32px; }
"#;

fn name_value_pairs(entries: &[WordFrequencyEntry]) -> Vec<Value> {
    entries
        .iter()
        .map(|e| json!({ "name": e.word, "value": e.frequency }))
        .collect()
}

fn axis_words(entries: &[WordFrequencyEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.word.as_str()).collect()
}

fn axis_counts(entries: &[WordFrequencyEntry]) -> Vec<u32> {
    entries.iter().map(|e| e.frequency).collect()
}

/// ECharts option object for one chart spec. This is the only place that
/// speaks the chart library's vocabulary.
pub fn echarts_option(spec: &ChartSpec) -> Value {
    let title = spec.kind().title();
    match spec {
        ChartSpec::WordCloud { entries } => json!({
            "title": { "text": title },
            "tooltip": {},
            "series": [{
                "type": "wordCloud",
                "shape": "diamond",
                "sizeRange": [20, 100],
                "data": name_value_pairs(entries),
            }],
        }),
        ChartSpec::Bar { entries } => category_axis_option(title, "bar", entries),
        ChartSpec::Line { entries } => category_axis_option(title, "line", entries),
        ChartSpec::Scatter { entries } => category_axis_option(title, "scatter", entries),
        ChartSpec::Pie { entries } => json!({
            "title": { "text": title },
            "tooltip": {},
            "series": [{
                "name": "frequency",
                "type": "pie",
                "data": name_value_pairs(entries),
            }],
        }),
        ChartSpec::Funnel { entries } => json!({
            "title": { "text": title },
            "tooltip": {},
            "series": [{
                "name": "frequency",
                "type": "funnel",
                "data": name_value_pairs(entries),
            }],
        }),
        ChartSpec::Radar { entries, axis_max } => {
            let indicators: Vec<Value> = entries
                .iter()
                .map(|e| json!({ "name": e.word, "max": axis_max }))
                .collect();
            json!({
                "title": { "text": title },
                "tooltip": {},
                "radar": { "indicator": indicators },
                "series": [{
                    "name": "frequency",
                    "type": "radar",
                    "data": [{ "name": "frequency", "value": axis_counts(entries) }],
                }],
            })
        }
    }
}

/// Word-per-category charts share one skeleton, with labels rotated 45
/// degrees so long words stay legible.
fn category_axis_option(title: &str, series_type: &str, entries: &[WordFrequencyEntry]) -> Value {
    json!({
        "title": { "text": title },
        "tooltip": {},
        "xAxis": {
            "type": "category",
            "data": axis_words(entries),
            "axisLabel": { "rotate": 45 },
        },
        "yAxis": { "type": "value" },
        "series": [{
            "name": "frequency",
            "type": series_type,
            "data": axis_counts(entries),
        }],
    })
}

/// Assemble the self-contained report page: summary, ranking table, and one
/// container plus init script per chart spec.
pub fn build_report(result: &AnalysisResult, specs: &[ChartSpec]) -> String {
    let needs_wordcloud = specs.iter().any(|s| s.kind() == ChartKind::WordCloud);
    let wordcloud_script = if needs_wordcloud {
        format!("<script src=\"{WORDCLOUD_CDN}\"></script>")
    } else {
        String::new()
    };

    let mut table_rows = String::new();
    for (rank, entry) in top_k(&result.entries, REPORT_TABLE_ROWS).iter().enumerate() {
        table_rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"count\">{}</td></tr>\n",
            rank + 1,
            encode_text(&entry.word),
            entry.frequency
        ));
    }

    let mut chart_sections = String::new();
    let mut chart_scripts = String::new();
    for (index, spec) in specs.iter().enumerate() {
        chart_sections.push_str(&format!(
            "<h2>{}</h2>\n<div class=\"chart\" id=\"chart-{index}\"></div>\n",
            spec.kind().title()
        ));
        chart_scripts.push_str(&format!(
            "echarts.init(document.getElementById('chart-{index}')).setOption({});\n",
            echarts_option(spec)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Word Frequency Report</title>
<style>{css}</style>
<script src="{echarts}"></script>
{wordcloud_script}
</head>
<body>
<h1>Word Frequency Report</h1>
<p class="meta">Generated {generated} &middot; Source <a href="{url_attr}">{url}</a></p>
<div class="summary">
{text_chars} characters extracted &middot; {total_tokens} tokens counted &middot;
{distinct} distinct words kept &middot; {dropped} below the frequency threshold
</div>
<h2>Top {table_len} Words</h2>
<table>
<tr><th>#</th><th>Word</th><th>Count</th></tr>
{table_rows}</table>
{chart_sections}<script>
{chart_scripts}</script>
</body>
</html>
"#,
        css = REPORT_CSS,
        echarts = ECHARTS_CDN,
        wordcloud_script = wordcloud_script,
        generated = Local::now().format("%Y-%m-%d %H:%M:%S"),
        url_attr = encode_double_quoted_attribute(&result.url),
        url = encode_text(&result.url),
        text_chars = result.text_chars,
        total_tokens = result.stats.total_tokens,
        distinct = result.stats.distinct_words(),
        dropped = result.stats.below_min_frequency,
        table_len = top_k(&result.entries, REPORT_TABLE_ROWS).len(),
        table_rows = table_rows,
        chart_sections = chart_sections,
        chart_scripts = chart_scripts,
    )
}

/// Write the report to disk. IO failures come back as typed errors so the
/// shell can report them like any other analysis failure.
pub fn write_report(
    path: &Path,
    result: &AnalysisResult,
    specs: &[ChartSpec],
) -> Result<(), AnalysisError> {
    let start_time = Instant::now();
    let html = build_report(result, specs);

    fs::write(path, &html).map_err(|e| AnalysisError::Render {
        path: path.to_path_buf(),
        source: e,
    })?;

    let write_time = start_time.elapsed();
    info!(
        action = "write",
        component = "render",
        path = %path.display(),
        charts = specs.len(),
        bytes = html.len(),
        duration_ms = write_time.as_millis(),
        "Report written"
    );

    Ok(())
}
