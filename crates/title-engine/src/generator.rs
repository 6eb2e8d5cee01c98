//! Title candidate generation.
//!
//! Candidates come from three sources, in priority order:
//! 1. Templates for the classified post type
//! 2. Generic "engaging" templates built from randomly chosen prefixes
//! 3. Rewrites of the author's original title
//!
//! The output is unfiltered; `TitleSuggester` applies length limits,
//! deduplication and the result cap.

use std::sync::Arc;

use title_types::{main_tag, PostType, SuggesterConfig};

use crate::shuffle::{PrefixShuffler, RandomShuffler};
use crate::vocabulary::{ENGAGING_PREFIXES, GENERIC_TITLE_PHRASES};

/// Builds candidate titles from key phrases, tags and the original title.
#[derive(Clone)]
pub struct TitleGenerator {
    config: SuggesterConfig,
    shuffler: Arc<dyn PrefixShuffler>,
}

impl TitleGenerator {
    /// Create a generator with default limits and random prefixes.
    pub fn new() -> Self {
        Self::with_shuffler(SuggesterConfig::default(), Arc::new(RandomShuffler))
    }

    /// Create a generator with explicit limits and prefix selection.
    pub fn with_shuffler(config: SuggesterConfig, shuffler: Arc<dyn PrefixShuffler>) -> Self {
        Self { config, shuffler }
    }

    /// All candidates for one post, in priority order.
    pub fn generate(
        &self,
        post_type: PostType,
        phrases: &[String],
        original_title: Option<&str>,
        tags: Option<&str>,
    ) -> Vec<String> {
        let tag = main_tag(tags);

        let mut titles = self.category_titles(post_type, phrases, tag.as_deref());
        titles.extend(self.engaging_titles(phrases, tag.as_deref()));

        if let Some(title) = original_title.filter(|t| !t.trim().is_empty()) {
            titles.extend(self.improve_original_title(title, phrases));
        }

        titles
    }

    /// Templates specific to `post_type`.
    pub fn category_titles(
        &self,
        post_type: PostType,
        phrases: &[String],
        tag: Option<&str>,
    ) -> Vec<String> {
        let mut titles = Vec::new();

        if let Some(first) = phrases.first() {
            let main = capitalize_first(first);
            let second = phrases.get(1);
            let third = phrases.get(2);

            match post_type {
                PostType::Question => {
                    titles.push(format!("How to {main}?"));
                    titles.push(format!("What's the best way to {main}?"));
                    if let Some(second) = second {
                        titles.push(format!("How can I {main} when dealing with {second}?"));
                    }
                    match third {
                        Some(third) => {
                            titles.push(format!("Need help understanding {main} for {third}"))
                        }
                        None => titles.push(format!("Need help understanding {main}")),
                    }
                    titles.push(format!("Can someone explain {main}?"));
                    titles.push(format!("What are the steps for {main}?"));
                }
                PostType::Problem => {
                    titles.push(format!("Solving {main} problem"));
                    titles.push(format!("Troubleshooting: {main}"));
                    if let Some(second) = second {
                        titles.push(format!("{main} issue with {second}"));
                    }
                    titles.push(format!("Help needed: {main} not working"));
                    titles.push(format!("Bug fix for {main}"));
                    titles.push(format!("How to resolve {main} error"));
                }
                PostType::Sharing => {
                    titles.push(format!("I created {main} - here's how"));
                    titles.push(format!("Tutorial: Building {main}"));
                    if let Some(second) = second {
                        titles.push(format!("How I combined {main} with {second}"));
                    }
                    titles.push(format!("Sharing my approach to {main}"));
                    titles.push(format!("New way to implement {main}"));
                    titles.push(format!("A practical guide to {main}"));
                }
                PostType::Discussion => {
                    titles.push(format!("Let's discuss {main}"));
                    titles.push(format!("Thoughts on {main}?"));
                    if let Some(second) = second {
                        titles.push(format!("{main} vs {second}: your opinions?"));
                    }
                    titles.push(format!("The future of {main}"));
                    titles.push(format!("What do you think about {main}?"));
                    titles.push(format!("Exploring {main} in depth"));
                }
            }
        }

        if let Some(tag) = tag {
            let tag = capitalize_first(tag);
            let phrase = phrases.first().map(String::as_str);
            titles.push(match post_type {
                PostType::Question => {
                    format!("Question about {tag}: {}", phrase.unwrap_or("need help"))
                }
                PostType::Problem => {
                    format!("{tag} error: {}", phrase.unwrap_or("troubleshooting help"))
                }
                PostType::Sharing => {
                    format!("{tag} project: {}", phrase.unwrap_or("my implementation"))
                }
                PostType::Discussion => {
                    format!("{tag} discussion: {}", phrase.unwrap_or("sharing ideas"))
                }
            });
        }

        titles
    }

    /// Generic titles independent of the post type.
    pub fn engaging_titles(&self, phrases: &[String], tag: Option<&str>) -> Vec<String> {
        let mut titles = Vec::new();
        let Some(main) = phrases.first() else {
            return titles;
        };

        for prefix in self
            .shuffler
            .pick(ENGAGING_PREFIXES, self.config.engaging_prefix_count)
        {
            titles.push(format!("{prefix} {main}"));
        }

        if let (Some(second), Some(third)) = (phrases.get(1), phrases.get(2)) {
            titles.push(format!("From {second} to {third}: A Complete Guide"));
        }

        if let Some(tag) = tag {
            titles.push(format!(
                "{}: The Complete Guide to {main}",
                capitalize_first(tag)
            ));
        }

        titles
    }

    /// Rewrites of the author's own title.
    ///
    /// Titles shorter than `min_improvable_title_length` are left alone.
    pub fn improve_original_title(&self, original: &str, phrases: &[String]) -> Vec<String> {
        let mut titles = Vec::new();
        if original.chars().count() < self.config.min_improvable_title_length {
            return titles;
        }

        let trimmed = original.trim();
        let ends_with_question = trimmed.ends_with('?');

        let mut clean = strip_trailing_run(trimmed, &['!', '.']);
        if ends_with_question {
            clean = strip_trailing_run(clean, &['?']);
        }
        let suffix = if ends_with_question { "?" } else { "" };

        if let Some(main) = phrases.first() {
            if !clean.contains(main.as_str()) {
                titles.push(format!("{clean}: {}{suffix}", capitalize_first(main)));
            }
        }

        if clean.chars().count() > self.config.long_title_chars {
            let words: Vec<&str> = clean.split_whitespace().collect();
            if words.len() > self.config.short_title_words {
                let shorter = words[..self.config.short_title_words].join(" ");
                titles.push(format!("{shorter}{suffix}"));
            }
        }

        let lower = clean.to_lowercase();
        let is_generic = GENERIC_TITLE_PHRASES.iter().any(|g| lower.contains(g));
        if is_generic {
            if let Some(main) = phrases.first() {
                titles.push(format!("Specific {clean} about {main}{suffix}"));
            }
        }

        titles
    }
}

impl Default for TitleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Remove a trailing run of `set` characters and the whitespace before it.
///
/// Leaves `text` untouched when it does not end in one of `set`.
fn strip_trailing_run<'a>(text: &'a str, set: &[char]) -> &'a str {
    let stripped = text.trim_end_matches(|c: char| set.contains(&c));
    if stripped.len() == text.len() {
        text
    } else {
        stripped.trim_end_matches(|c: char| c.is_ascii_whitespace())
    }
}
