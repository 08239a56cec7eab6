use jieba_rs::Jieba;
use std::collections::HashSet;
use tracing::debug;

/// Words shorter than this are never counted (single characters carry little
/// signal in mixed Chinese/Latin text, and whitespace runs trim to nothing).
const MIN_WORD_CHARS: usize = 2;

/// Chinese-aware word segmenter with an injected stop-word set.
///
/// The segmenter dictionary and the stop words are loaded once at
/// construction; tokenizing is then a pure function of the input text.
pub struct Tokenizer {
    jieba: Jieba,
    stop_words: HashSet<String>,
}

impl Tokenizer {
    pub fn new(stop_words: HashSet<String>) -> Self {
        Self {
            jieba: Jieba::new(),
            stop_words,
        }
    }

    /// Segment `text` into words, in order of first appearance, duplicates
    /// retained. Tokens of one character or less and tokens found in the
    /// stop-word set are dropped.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let words = self.jieba.cut(text, true);
        let tokens: Vec<&str> = words
            .into_iter()
            .map(str::trim)
            .filter(|word| word.chars().count() >= MIN_WORD_CHARS)
            .filter(|word| !self.stop_words.contains(*word))
            .collect();

        debug!(
            action = "complete",
            component = "tokenize",
            text_chars = text.chars().count(),
            token_count = tokens.len(),
            "Text segmented"
        );
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer_with(words: &[&str]) -> Tokenizer {
        Tokenizer::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_segments_chinese_words() {
        let tokenizer = tokenizer_with(&[]);
        let tokens = tokenizer.tokenize("苹果 苹果 苹果 香蕉");
        assert_eq!(tokens, vec!["苹果", "苹果", "苹果", "香蕉"]);
    }

    #[test]
    fn test_single_characters_are_dropped() {
        let tokenizer = tokenizer_with(&[]);
        let tokens = tokenizer.tokenize("a 苹果 b 了 香蕉 x");
        assert!(tokens.iter().all(|t| t.chars().count() > 1));
        assert!(!tokens.contains(&"a"));
        assert!(!tokens.contains(&"了"));
    }

    #[test]
    fn test_stop_words_are_dropped() {
        let tokenizer = tokenizer_with(&["苹果", "hello"]);
        let tokens = tokenizer.tokenize("苹果 香蕉 hello world");
        assert!(!tokens.contains(&"苹果"));
        assert!(!tokens.contains(&"hello"));
        assert!(tokens.contains(&"香蕉"));
        assert!(tokens.contains(&"world"));
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let tokenizer = tokenizer_with(&[]);
        let tokens = tokenizer.tokenize("banana apple banana");
        assert_eq!(tokens, vec!["banana", "apple", "banana"]);
    }

    #[test]
    fn test_whitespace_runs_never_become_tokens() {
        let tokenizer = tokenizer_with(&[]);
        let tokens = tokenizer.tokenize("apple \n\n\t  banana");
        assert_eq!(tokens, vec!["apple", "banana"]);
    }

    #[test]
    fn test_empty_text_yields_no_tokens() {
        let tokenizer = tokenizer_with(&[]);
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn test_mixed_script_text() {
        let tokenizer = tokenizer_with(&[]);
        let tokens = tokenizer.tokenize("程序员 write 代码 every day");
        assert!(tokens.contains(&"程序员"));
        assert!(tokens.contains(&"代码"));
        assert!(tokens.contains(&"write"));
        assert!(tokens.contains(&"every"));
        assert!(tokens.contains(&"day"));
    }
}
