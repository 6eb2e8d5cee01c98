//! Fixed word lists used by extraction, classification and generation.

/// Words that suggest the author is asking something.
pub const QUESTION_INDICATORS: &[&str] = &[
    "how", "what", "why", "when", "where", "who", "which", "can", "could", "should", "would", "is",
    "are", "do", "does",
];

/// Words that suggest the author is reporting a failure.
pub const PROBLEM_INDICATORS: &[&str] = &[
    "problem", "issue", "error", "bug", "fail", "crash", "trouble", "help", "stuck", "can't",
    "cannot", "doesn't", "won't", "broken",
];

/// Words that suggest the author is showing something they made.
pub const SHARING_INDICATORS: &[&str] = &[
    "created",
    "built",
    "made",
    "developed",
    "implemented",
    "designed",
    "discovered",
    "tutorial",
    "guide",
    "howto",
    "tip",
    "trick",
    "share",
];

/// Prefixes prepended to the main phrase for generic titles.
pub const ENGAGING_PREFIXES: &[&str] = &[
    "The Ultimate Guide to",
    "How to Master",
    "Quick Tips for",
    "The Secret of",
    "Top 5 Ways to",
    "Essential Guide to",
    "Solving",
    "Mastering",
    "Understanding",
];

/// Title fragments that mark a title as too vague.
pub const GENERIC_TITLE_PHRASES: &[&str] =
    &["help me", "question", "problem", "issue", "need help"];

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "is", "are", "was", "were", "be", "been", "have", "has",
    "had", "do", "does", "did", "to", "from", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don", "should",
    "now", "also", "new", "one", "two", "like", "get", "make", "know", "take", "our", "we", "us",
    "my", "me", "i", "you", "your", "him", "his", "her", "she", "they", "them", "their", "about",
    "before", "after", "above", "below", "between", "into", "through", "during", "with",
    "without", "for", "of", "at", "by", "up", "down", "this", "that", "these", "those", "am",
    "im", "its", "it's", "it",
];

/// Check if a word is a stop word. Expects lowercase input.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
