//! Word frequency counting.
//!
//! A word is a run of ASCII letters, digits and apostrophes. Words are
//! lowercased before counting and must contain at least one letter.

pub mod report;

use serde::Serialize;
use std::collections::HashMap;

pub use report::{format_report, RESULTS_FILE};

/// A distinct word and the number of times it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub frequency: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\''
}

/// Split text into lowercase words
pub fn extract_words(text: &str) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_ascii_lowercase())
        .collect()
}

/// Count distinct words in first-seen order.
/// Words without any letter are passed to `on_skip` and not counted.
pub fn count_frequencies<F>(words: &[String], mut on_skip: F) -> Vec<WordCount>
where
    F: FnMut(&str),
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<WordCount> = Vec::new();

    for word in words {
        if word.is_empty() {
            continue;
        }
        if !word.chars().any(|c| c.is_ascii_alphabetic()) {
            on_skip(word);
            continue;
        }
        match index.get(word.as_str()) {
            Some(&i) => counts[i].frequency += 1,
            None => {
                index.insert(word.as_str(), counts.len());
                counts.push(WordCount {
                    word: word.clone(),
                    frequency: 1,
                });
            }
        }
    }

    counts
}

/// Order by frequency (highest first), then alphabetically
pub fn sort_frequencies(counts: &mut [WordCount]) {
    counts.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.word.cmp(&b.word)));
}
