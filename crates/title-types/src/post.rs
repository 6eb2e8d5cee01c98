//! Post input and post type classification types.
//!
//! - `RawPost`: The content, optional title and optional tag string of a forum post
//! - `PostType`: The heuristic category driving which title templates are used

use serde::{Deserialize, Serialize};

/// A forum post as submitted for title suggestion.
///
/// Immutable for the duration of a suggestion request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    /// Post body
    pub content: String,

    /// Title the author already typed, if any
    #[serde(default)]
    pub original_title: Option<String>,

    /// Comma-separated tag string, if any
    #[serde(default)]
    pub tags: Option<String>,
}

impl RawPost {
    /// Create a post with content only.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            original_title: None,
            tags: None,
        }
    }

    /// Set the author's original title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.original_title = Some(title.into());
        self
    }

    /// Set the comma-separated tag string.
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Returns true if there is no content worth analyzing.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Original title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        self.original_title.as_deref().filter(|t| !t.is_empty())
    }

    /// The first comma-separated tag, trimmed.
    ///
    /// Trailing empty segments are ignored, so a tag string made only of
    /// commas has no main tag. A leading empty segment is kept and yields
    /// an empty tag.
    pub fn main_tag(&self) -> Option<String> {
        main_tag(self.tags.as_deref())
    }
}

/// The first comma-separated tag of `tags`, trimmed. See [`RawPost::main_tag`].
pub fn main_tag(tags: Option<&str>) -> Option<String> {
    let tags = tags.filter(|t| !t.is_empty())?;
    let mut parts: Vec<&str> = tags.split(',').collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts.first().map(|tag| tag.trim().to_string())
}

/// Heuristic category of a post.
///
/// Exactly one value per request. `Discussion` is the fallback when no
/// indicator scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    /// Asking how or why something works.
    /// Examples: "How do I parse JSON?", "What is a lifetime?"
    Question,

    /// Reporting something that is broken.
    /// Examples: "Build fails with linker error", "App crashes on start"
    Problem,

    /// Showing off a project, tip or tutorial.
    /// Examples: "I built a CLI for notes", "Tutorial: async streams"
    Sharing,

    /// Open-ended conversation. Used when nothing else matched.
    #[default]
    Discussion,
}

impl PostType {
    /// Returns the display name for this post type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Question => "question",
            PostType::Problem => "problem",
            PostType::Sharing => "sharing",
            PostType::Discussion => "discussion",
        }
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_tag_first_trimmed() {
        let post = RawPost::new("body").with_tags(" java , debugging");
        assert_eq!(post.main_tag().as_deref(), Some("java"));
    }

    #[test]
    fn test_main_tag_absent() {
        assert_eq!(RawPost::new("body").main_tag(), None);
        assert_eq!(RawPost::new("body").with_tags("").main_tag(), None);
    }

    #[test]
    fn test_main_tag_only_commas() {
        let post = RawPost::new("body").with_tags(",,,");
        assert_eq!(post.main_tag(), None);
    }

    #[test]
    fn test_main_tag_leading_empty_segment() {
        let post = RawPost::new("body").with_tags(",rust");
        assert_eq!(post.main_tag().as_deref(), Some(""));
    }

    #[test]
    fn test_main_tag_free_function() {
        assert_eq!(main_tag(Some("go,tutorial")).as_deref(), Some("go"));
        assert_eq!(main_tag(Some("  ")).as_deref(), Some(""));
        assert_eq!(main_tag(None), None);
    }

    #[test]
    fn test_is_blank() {
        assert!(RawPost::new("").is_blank());
        assert!(RawPost::new("  \n\t").is_blank());
        assert!(!RawPost::new("ok").is_blank());
    }

    #[test]
    fn test_title_filters_empty() {
        assert_eq!(RawPost::new("x").with_title("").title(), None);
        assert_eq!(RawPost::new("x").with_title("Hi").title(), Some("Hi"));
    }

    #[test]
    fn test_post_type_default_is_discussion() {
        assert_eq!(PostType::default(), PostType::Discussion);
    }

    #[test]
    fn test_post_type_serialization() {
        let json = serde_json::to_string(&PostType::Sharing).unwrap();
        assert_eq!(json, "\"sharing\"");
        let parsed: PostType = serde_json::from_str("\"problem\"").unwrap();
        assert_eq!(parsed, PostType::Problem);
    }
}
