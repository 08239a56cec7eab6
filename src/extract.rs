use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Tags whose entire subtree carries no readable content.
const EXCLUDED_TAGS: &str = "script, style, iframe";

/// Extract the visible text of an HTML document.
///
/// Text nodes under `script`, `style`, or `iframe` elements are skipped
/// entirely; everything else is concatenated in document order with
/// whitespace collapsed to single spaces. The parser is error-tolerant, so
/// malformed markup degrades to whatever text survives rather than failing.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let excluded = Selector::parse(EXCLUDED_TAGS).unwrap();

    let mut chunks: Vec<&str> = Vec::new();
    for node in document.tree.root().descendants() {
        if let Some(text) = node.value().as_text() {
            let in_excluded = node.ancestors().any(|ancestor| {
                ElementRef::wrap(ancestor)
                    .map(|element| excluded.matches(&element))
                    .unwrap_or(false)
            });
            if in_excluded {
                continue;
            }
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                chunks.push(trimmed);
            }
        }
    }

    let text = chunks
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    debug!(
        action = "complete",
        component = "extract",
        html_bytes = html.len(),
        text_chars = text.chars().count(),
        "Text extracted"
    );
    text
}
