//! # title-engine
//!
//! Title suggestion engine for forum posts.
//!
//! This crate turns a post body, an optional author title and an optional
//! tag string into a short ranked list of candidate titles.
//!
//! ## Core Concepts
//!
//! - **Key phrase**: A 1-3 word sequence ranked by weighted frequency
//! - **Post type**: Question/Problem/Sharing/Discussion, chosen by indicator words
//! - **Templates**: Per-type title patterns plus generic "engaging" patterns
//! - **Prefix shuffler**: Injectable choice of engaging prefixes
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use title_engine::{FixedOrderShuffler, TitleSuggester};
//! use title_types::{RawPost, SuggesterConfig};
//!
//! let suggester =
//!     TitleSuggester::with_shuffler(SuggesterConfig::default(), Arc::new(FixedOrderShuffler));
//! let post = RawPost::new("I built a simple REST API tutorial using Go and sqlite")
//!     .with_tags("go,tutorial");
//!
//! let titles = suggester.suggest(&post);
//! assert!(titles.iter().any(|t| t.starts_with("Tutorial: Building")));
//! ```

pub mod classifier;
pub mod generator;
pub mod phrases;
pub mod shuffle;
pub mod suggester;
pub mod vocabulary;

pub use classifier::{ClassificationResult, PostTypeClassifier};
pub use generator::{capitalize_first, TitleGenerator};
pub use phrases::{normalize, split_sentences, ContentAnalysis, PhraseExtractor, PhraseFrequencyMap};
pub use shuffle::{FixedOrderShuffler, PrefixShuffler, RandomShuffler, SeededShuffler};
pub use suggester::{finalize, suggest_titles, SuggestionReport, TitleSuggester};

// Re-export shared types callers need alongside the engine
pub use title_types::{PostType, RawPost, Settings, SuggestError, SuggesterConfig};
