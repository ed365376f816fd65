//! Word tokenizer for headlines.
//!
//! Lowercases the input and keeps runs of two or more word characters, so
//! punctuation splits tokens and single letters or digits are dropped.

use regex::Regex;
use std::sync::LazyLock;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

#[derive(Debug, Clone)]
pub struct Tokenizer {
    lowercase: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self { lowercase: true }
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        TOKEN_REGEX
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
