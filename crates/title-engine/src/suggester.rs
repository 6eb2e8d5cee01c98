//! The `TitleSuggester` pipeline.
//!
//! extract phrases -> classify post type -> generate candidates -> filter,
//! deduplicate and cap. Suggestion is best effort: `suggest` never fails,
//! it logs and returns an empty list instead.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use title_types::{PostType, RawPost, Settings, SuggestError, SuggesterConfig};

use crate::classifier::{ClassificationResult, PostTypeClassifier};
use crate::generator::TitleGenerator;
use crate::phrases::PhraseExtractor;
use crate::shuffle::{PrefixShuffler, RandomShuffler, SeededShuffler};

/// Everything one suggestion request produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionReport {
    /// Winning post type
    pub post_type: PostType,

    /// Scores behind the post type
    pub classification: ClassificationResult,

    /// Ranked key phrases the templates were filled with
    pub key_phrases: Vec<String>,

    /// Final titles, best first
    pub titles: Vec<String>,
}

impl SuggestionReport {
    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> Result<String, SuggestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Suggests forum post titles from content, original title and tags.
#[derive(Clone)]
pub struct TitleSuggester {
    config: SuggesterConfig,
    extractor: PhraseExtractor,
    classifier: PostTypeClassifier,
    generator: TitleGenerator,
}

impl TitleSuggester {
    /// Create a suggester with default configuration and random prefixes.
    pub fn new() -> Self {
        Self::with_config(SuggesterConfig::default())
    }

    /// Create a suggester with custom configuration and random prefixes.
    pub fn with_config(config: SuggesterConfig) -> Self {
        Self::with_shuffler(config, Arc::new(RandomShuffler))
    }

    /// Create a suggester with custom configuration and prefix selection.
    pub fn with_shuffler(config: SuggesterConfig, shuffler: Arc<dyn PrefixShuffler>) -> Self {
        Self {
            extractor: PhraseExtractor::with_config(&config),
            classifier: PostTypeClassifier::with_config(&config),
            generator: TitleGenerator::with_shuffler(config.clone(), shuffler),
            config,
        }
    }

    /// Create a suggester from loaded settings. A configured seed pins prefix selection.
    pub fn from_settings(settings: &Settings) -> Self {
        let shuffler: Arc<dyn PrefixShuffler> = match settings.seed {
            Some(seed) => Arc::new(SeededShuffler::new(seed)),
            None => Arc::new(RandomShuffler),
        };
        Self::with_shuffler(settings.suggester.clone(), shuffler)
    }

    /// Suggest titles, returning an empty list on any failure.
    pub fn suggest(&self, post: &RawPost) -> Vec<String> {
        match self.try_suggest(post) {
            Ok(report) => report.titles,
            Err(e) => {
                warn!(error = %e, "Error generating title suggestions");
                Vec::new()
            }
        }
    }

    /// Run the full pipeline and report every intermediate result.
    ///
    /// Blank content is not an error and yields an empty report.
    pub fn try_suggest(&self, post: &RawPost) -> Result<SuggestionReport, SuggestError> {
        self.config.validate()?;

        if post.is_blank() {
            debug!("Blank content, no suggestions");
            return Ok(SuggestionReport::default());
        }

        let analysis = self.extractor.analyze(&post.content);
        let classification = self.classifier.classify(&analysis.words, post.title());

        let candidates = self.generator.generate(
            classification.post_type,
            &analysis.phrases,
            post.original_title.as_deref(),
            post.tags.as_deref(),
        );
        let candidate_count = candidates.len();
        let titles = finalize(candidates, &self.config);

        debug!(
            post_type = classification.post_type.as_str(),
            candidates = candidate_count,
            returned = titles.len(),
            "Generated title suggestions"
        );

        Ok(SuggestionReport {
            post_type: classification.post_type,
            classification,
            key_phrases: analysis.phrases,
            titles,
        })
    }

    /// Classify a post without generating titles.
    pub fn classify(&self, post: &RawPost) -> ClassificationResult {
        let analysis = self.extractor.analyze(&post.content);
        self.classifier.classify(&analysis.words, post.title())
    }

    /// Ranked key phrases of `content`.
    pub fn key_phrases(&self, content: &str) -> Vec<String> {
        self.extractor.extract(content)
    }
}

impl Default for TitleSuggester {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop blank and over-long candidates, deduplicate keeping the first
/// occurrence, and cap at `max_suggestions`. Generation order is kept.
pub fn finalize(candidates: Vec<String>, config: &SuggesterConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|t| !t.trim().is_empty())
        .filter(|t| t.chars().count() <= config.max_title_length)
        .filter(|t| seen.insert(t.clone()))
        .take(config.max_suggestions)
        .collect()
}

/// Suggest up to five titles for a post using default settings.
///
/// Engaging prefixes are picked at random, so repeated calls may differ in
/// those entries.
pub fn suggest_titles(
    content: &str,
    original_title: Option<&str>,
    tags: Option<&str>,
) -> Vec<String> {
    let post = RawPost {
        content: content.to_string(),
        original_title: original_title.map(String::from),
        tags: tags.map(String::from),
    };
    TitleSuggester::new().suggest(&post)
}
