//! Post type classification.
//!
//! This module implements the `PostTypeClassifier` which scores post words
//! and the optional original title against fixed indicator sets to decide
//! whether a post is a Question, Problem, Sharing or Discussion post.

use serde::{Deserialize, Serialize};
use tracing::debug;

use title_types::{PostType, SuggesterConfig};

use crate::vocabulary::{PROBLEM_INDICATORS, QUESTION_INDICATORS, SHARING_INDICATORS};

/// Weight of a content word that is also a `?`-terminated question.
const QUESTION_MARK_WEIGHT: u32 = 2;
/// Weight of an indicator word found in the original title.
const TITLE_WORD_WEIGHT: u32 = 2;
/// Bonus when the original title itself ends with `?`.
const TITLE_QUESTION_BONUS: u32 = 3;

/// Result of post type classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The classified post type
    pub post_type: PostType,

    /// Accumulated question score
    pub question_score: u32,

    /// Accumulated problem score
    pub problem_score: u32,

    /// Accumulated sharing score
    pub sharing_score: u32,

    /// Indicator words that contributed, in scan order
    pub matched_indicators: Vec<String>,
}

impl ClassificationResult {
    /// Highest of the three category scores.
    pub fn max_score(&self) -> u32 {
        self.question_score
            .max(self.problem_score)
            .max(self.sharing_score)
    }
}

#[derive(Debug, Default)]
struct Scores {
    question: u32,
    problem: u32,
    sharing: u32,
    matched: Vec<String>,
}

impl Scores {
    fn add_word(&mut self, word: &str, weight: u32) {
        let mut matched = false;
        if QUESTION_INDICATORS.contains(&word) {
            self.question += weight;
            matched = true;
        }
        if PROBLEM_INDICATORS.contains(&word) {
            self.problem += weight;
            matched = true;
        }
        if SHARING_INDICATORS.contains(&word) {
            self.sharing += weight;
            matched = true;
        }
        if matched {
            self.matched.push(word.to_string());
        }
    }
}

/// Post type classifier using indicator-word heuristics.
#[derive(Debug, Clone)]
pub struct PostTypeClassifier {
    window: usize,
}

impl PostTypeClassifier {
    /// Create a classifier with the default scan window.
    pub fn new() -> Self {
        Self::with_config(&SuggesterConfig::default())
    }

    /// Create a classifier using the scan window in `config`.
    pub fn with_config(config: &SuggesterConfig) -> Self {
        Self {
            window: config.classification_window,
        }
    }

    /// Classify normalized content words and an optional original title.
    pub fn classify<S: AsRef<str>>(
        &self,
        words: &[S],
        original_title: Option<&str>,
    ) -> ClassificationResult {
        let mut scores = Scores::default();

        for word in words.iter().take(self.window) {
            scores.add_word(word.as_ref(), 1);
        }

        // Question marks count over the whole post, not just the window
        let question_marks = words
            .iter()
            .filter(|w| w.as_ref().ends_with('?'))
            .count() as u32;
        scores.question += question_marks * QUESTION_MARK_WEIGHT;

        if let Some(title) = original_title.filter(|t| !t.is_empty()) {
            let lower_title = title.to_lowercase();
            for word in lower_title.split_whitespace() {
                scores.add_word(word, TITLE_WORD_WEIGHT);
            }
            if title.ends_with('?') {
                scores.question += TITLE_QUESTION_BONUS;
            }
        }

        let post_type = Self::determine_type(scores.question, scores.problem, scores.sharing);

        debug!(
            question_score = scores.question,
            problem_score = scores.problem,
            sharing_score = scores.sharing,
            post_type = post_type.as_str(),
            "Post type classification scores"
        );

        ClassificationResult {
            post_type,
            question_score: scores.question,
            problem_score: scores.problem,
            sharing_score: scores.sharing,
            matched_indicators: scores.matched,
        }
    }

    /// Pick the winning type. Ties resolve question, then problem, then sharing.
    fn determine_type(question: u32, problem: u32, sharing: u32) -> PostType {
        let max_score = question.max(problem).max(sharing);

        if max_score == 0 {
            PostType::Discussion
        } else if max_score == question {
            PostType::Question
        } else if max_score == problem {
            PostType::Problem
        } else {
            PostType::Sharing
        }
    }
}

impl Default for PostTypeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        crate::phrases::normalize(text)
            .split_whitespace()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_classify_question() {
        let classifier = PostTypeClassifier::new();

        let result = classifier.classify(&words("how does the borrow checker work"), None);
        assert_eq!(result.post_type, PostType::Question);
        assert_eq!(result.question_score, 2);
        assert_eq!(result.matched_indicators, vec!["how", "does"]);
    }

    #[test]
    fn test_classify_question_marks_only() {
        let classifier = PostTypeClassifier::new();

        let result = classifier.classify(&words("Lifetimes? Borrowing rules? Traits."), None);
        assert_eq!(result.post_type, PostType::Question);
        assert_eq!(result.question_score, 4);
        assert!(result.matched_indicators.is_empty());
    }

    #[test]
    fn test_classify_problem() {
        let classifier = PostTypeClassifier::new();

        let result = classifier.classify(&words("linker error after upgrade, build broken"), None);
        assert_eq!(result.post_type, PostType::Problem);
        assert_eq!(result.problem_score, 2);
    }

    #[test]
    fn test_classify_sharing() {
        let classifier = PostTypeClassifier::new();

        let result = classifier.classify(
            &words("I built a simple REST API tutorial using Go and sqlite"),
            None,
        );
        assert_eq!(result.post_type, PostType::Sharing);
        assert_eq!(result.sharing_score, 2);
    }

    #[test]
    fn test_classify_default_discussion() {
        let classifier = PostTypeClassifier::new();

        let result =
            classifier.classify(&words("functional programming in modern codebases"), None);
        assert_eq!(result.post_type, PostType::Discussion);
        assert_eq!(result.max_score(), 0);

        let empty: Vec<String> = Vec::new();
        assert_eq!(classifier.classify(&empty, None).post_type, PostType::Discussion);
    }

    #[test]
    fn test_tie_prefers_question_then_problem() {
        let classifier = PostTypeClassifier::new();

        // one question indicator, one problem indicator, one sharing indicator
        let result = classifier.classify(&words("what bug tutorial"), None);
        assert_eq!(result.post_type, PostType::Question);

        // problem and sharing tied
        let result = classifier.classify(&words("bug tutorial"), None);
        assert_eq!(result.post_type, PostType::Problem);
    }

    #[test]
    fn test_title_words_weigh_double() {
        let classifier = PostTypeClassifier::new();

        // title words add two each; an equal score still resolves to question
        let result = classifier.classify(&words("how is this"), Some("Crash on startup"));
        assert_eq!(result.question_score, 2);
        assert_eq!(result.problem_score, 2);
        assert_eq!(result.post_type, PostType::Question);

        let result = classifier.classify(&words("what now"), Some("Stuck with a weird bug"));
        assert_eq!(result.problem_score, 4);
        assert_eq!(result.post_type, PostType::Problem);
    }

    #[test]
    fn test_title_question_mark_bonus() {
        let classifier = PostTypeClassifier::new();

        let result = classifier.classify(&words("a tutorial"), Some("Anyone tried this?"));
        assert_eq!(result.question_score, 3);
        assert_eq!(result.sharing_score, 1);
        assert_eq!(result.post_type, PostType::Question);
    }

    #[test]
    fn test_empty_title_ignored() {
        let classifier = PostTypeClassifier::new();

        let result = classifier.classify(&words("built it"), Some(""));
        assert_eq!(result.post_type, PostType::Sharing);
        assert_eq!(result.sharing_score, 1);
    }

    #[test]
    fn test_window_limits_indicator_scan() {
        let config = SuggesterConfig {
            classification_window: 2,
            ..Default::default()
        };
        let classifier = PostTypeClassifier::with_config(&config);

        let result = classifier.classify(&words("alpha beta crash why?"), None);
        // "crash" falls outside the window, the trailing "why?" still counts
        assert_eq!(result.problem_score, 0);
        assert_eq!(result.question_score, 2);
        assert_eq!(result.post_type, PostType::Question);
    }
}
