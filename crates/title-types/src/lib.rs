//! # title-types
//!
//! Shared domain types for the title suggestion engine.
//!
//! This crate defines the data structures passed between the engine and its callers:
//! - Posts: The raw content, title and tags a suggestion request is made for
//! - Post types: The heuristic category that selects a title template set
//! - Settings: Configuration types and layered loading
//! - Errors: The unified error type
//!
//! ## Usage
//!
//! ```rust
//! use title_types::{PostType, RawPost};
//!
//! let post = RawPost::new("How do I read a file in Rust?").with_tags("rust,io");
//! assert_eq!(post.main_tag().as_deref(), Some("rust"));
//! assert_eq!(PostType::default(), PostType::Discussion);
//! ```

pub mod config;
pub mod error;
pub mod post;

pub use config::{Settings, SuggesterConfig};
pub use error::SuggestError;
pub use post::{main_tag, PostType, RawPost};
