//! CLI argument parsing for title-suggest.
//!
//! CLI flags override all other config sources.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Forum post title suggestions
///
/// Suggests up to five titles for a post from its content, original title and tags.
#[derive(Parser, Debug)]
#[command(name = "title-suggest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/title-suggest/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Seed engaging-prefix selection for repeatable output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where post content comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct ContentArgs {
    /// Read content from this file
    #[arg(short, long, conflicts_with = "content")]
    pub file: Option<PathBuf>,

    /// Post content. `-` or omitted reads stdin
    pub content: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest titles for a post
    Suggest {
        /// Title the author already wrote
        #[arg(short, long)]
        title: Option<String>,

        /// Comma-separated tags; the first one is used in templates
        #[arg(long)]
        tags: Option<String>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        input: ContentArgs,
    },

    /// Show the post type and indicator scores
    Classify {
        /// Title the author already wrote
        #[arg(short, long)]
        title: Option<String>,

        #[command(flatten)]
        input: ContentArgs,
    },

    /// Show ranked key phrases
    Phrases {
        #[command(flatten)]
        input: ContentArgs,
    },

    /// Print the effective settings as TOML
    Config,
}
