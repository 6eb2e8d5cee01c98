//! Key phrase extraction.
//!
//! Scores unigrams, bigrams and trigrams by weighted frequency. Longer
//! phrases weigh more, and phrases from the leading sentences of a post
//! are counted again at double weight.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use title_types::SuggesterConfig;

use crate::vocabulary::is_stop_word;

const UNIGRAM_WEIGHT: u32 = 1;
const BIGRAM_WEIGHT: u32 = 3;
const TRIGRAM_WEIGHT: u32 = 5;
const IMPORTANT_SENTENCE_MULTIPLIER: u32 = 2;

/// Normalized words and ranked phrases for one post body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    /// Whitespace-separated words of the normalized content, punctuation kept
    pub words: Vec<String>,

    /// Key phrases, highest score first
    pub phrases: Vec<String>,
}

/// Accumulated phrase scores in first-seen order.
///
/// Ranking uses a stable sort, so equal scores keep the order in which
/// the phrases were first counted.
#[derive(Debug, Default)]
pub struct PhraseFrequencyMap {
    index: HashMap<String, usize>,
    entries: Vec<(String, u32)>,
}

impl PhraseFrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add weight to a phrase, inserting it if unseen.
    pub fn add(&mut self, phrase: String, weight: u32) {
        match self.index.get(&phrase) {
            Some(&i) => self.entries[i].1 += weight,
            None => {
                self.index.insert(phrase.clone(), self.entries.len());
                self.entries.push((phrase, weight));
            }
        }
    }

    /// Current score of a phrase (0 if never counted).
    pub fn score(&self, phrase: &str) -> u32 {
        self.index
            .get(phrase)
            .map(|&i| self.entries[i].1)
            .unwrap_or(0)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    /// Count every qualifying 1-, 2- and 3-gram of `words`.
    pub fn count_words<S: AsRef<str>>(&mut self, words: &[S], multiplier: u32) {
        let words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();

        for word in &words {
            if word.len() > 3 && !is_stop_word(word) {
                self.add((*word).to_string(), UNIGRAM_WEIGHT * multiplier);
            }
        }

        for pair in words.windows(2) {
            if pair.iter().all(|w| is_ngram_word(w)) {
                self.add(pair.join(" "), BIGRAM_WEIGHT * multiplier);
            }
        }

        for triple in words.windows(3) {
            if triple.iter().all(|w| is_ngram_word(w)) {
                self.add(triple.join(" "), TRIGRAM_WEIGHT * multiplier);
            }
        }
    }

    /// Top `limit` phrases by score, descending.
    pub fn ranked(&self, limit: usize) -> Vec<String> {
        let mut entries: Vec<&(String, u32)> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
            .into_iter()
            .take(limit)
            .map(|(phrase, _)| phrase.clone())
            .collect()
    }
}

fn is_ngram_word(word: &str) -> bool {
    word.len() > 2 && !is_stop_word(word)
}

/// Extracts ranked key phrases from post content.
#[derive(Debug, Clone)]
pub struct PhraseExtractor {
    max_key_phrases: usize,
    important_sentences: usize,
    fallback_phrases: usize,
}

impl PhraseExtractor {
    /// Create an extractor with default limits.
    pub fn new() -> Self {
        Self::with_config(&SuggesterConfig::default())
    }

    /// Create an extractor using the limits in `config`.
    pub fn with_config(config: &SuggesterConfig) -> Self {
        Self {
            max_key_phrases: config.max_key_phrases,
            important_sentences: config.important_sentences,
            fallback_phrases: config.fallback_phrases,
        }
    }

    /// Ranked key phrases of `content`. Blank content yields none.
    pub fn extract(&self, content: &str) -> Vec<String> {
        self.analyze(content).phrases
    }

    /// Normalize, tokenize and score `content`.
    pub fn analyze(&self, content: &str) -> ContentAnalysis {
        let normalized = normalize(content);
        let words: Vec<String> = normalized.split_whitespace().map(String::from).collect();

        let mut frequencies = PhraseFrequencyMap::new();
        frequencies.count_words(&words, 1);

        for sentence in split_sentences(&normalized)
            .into_iter()
            .take(self.important_sentences)
        {
            let sentence_words: Vec<&str> = sentence.split_whitespace().collect();
            frequencies.count_words(&sentence_words, IMPORTANT_SENTENCE_MULTIPLIER);
        }

        let mut phrases = frequencies.ranked(self.max_key_phrases);

        if phrases.is_empty() && !words.is_empty() {
            phrases = self.fallback(&words);
        }

        debug!(
            words = words.len(),
            distinct_phrases = frequencies.len(),
            top_phrase = phrases.first().map(String::as_str).unwrap_or(""),
            "Extracted key phrases"
        );

        ContentAnalysis { words, phrases }
    }

    /// Distinct long non-stop words in first-seen order.
    ///
    /// Uses the unigram filter, so it only yields words when unigram
    /// counting scored nothing.
    fn fallback(&self, words: &[String]) -> Vec<String> {
        let mut picked: Vec<String> = Vec::new();
        for word in words {
            if picked.len() >= self.fallback_phrases {
                break;
            }
            if word.len() > 3 && !is_stop_word(word) && !picked.contains(word) {
                picked.push(word.clone());
            }
        }
        picked
    }
}

impl Default for PhraseExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase, replace anything but ASCII letters, digits, whitespace and
/// `. , ? !` with a space, collapse whitespace and trim.
pub fn normalize(content: &str) -> String {
    let replaced: String = content
        .to_lowercase()
        .chars()
        .map(|c| if is_kept_char(c) { c } else { ' ' })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_kept_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r' | '.' | ',' | '?' | '!'
        )
}

/// Split on runs of `.`, `!` and `?`.
///
/// A leading terminator produces an empty first sentence; trailing empty
/// sentences are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut in_run = false;

    for (i, c) in text.char_indices() {
        if matches!(c, '.' | '!' | '?') {
            if !in_run {
                sentences.push(&text[start..i]);
                in_run = true;
            }
            start = i + c.len_utf8();
        } else {
            in_run = false;
        }
    }
    sentences.push(&text[start..]);

    while sentences.last().is_some_and(|s| s.is_empty()) {
        sentences.pop();
    }
    sentences
}
