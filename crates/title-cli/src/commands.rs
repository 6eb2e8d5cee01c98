//! Command implementations for title-suggest.
//!
//! Handles:
//! - suggest: Run the full pipeline and print titles or a JSON report
//! - classify: Print the post type and indicator scores
//! - phrases: Print ranked key phrases
//! - config: Print the effective settings
//!
//! Results go to stdout, logs to stderr.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use tracing::{debug, info};

use title_engine::{ClassificationResult, TitleSuggester};
use title_types::{RawPost, Settings};

use crate::cli::{Cli, Commands, ContentArgs};

/// Load settings and apply CLI overrides (highest precedence).
pub fn load_settings(
    config_path: Option<&str>,
    log_level_override: Option<&str>,
    seed_override: Option<u64>,
) -> Result<Settings> {
    let settings = Settings::load(config_path).context("Failed to load configuration")?;
    Ok(apply_overrides(settings, log_level_override, seed_override))
}

/// Apply CLI flag values on top of loaded settings.
pub fn apply_overrides(
    mut settings: Settings,
    log_level_override: Option<&str>,
    seed_override: Option<u64>,
) -> Settings {
    if let Some(log_level) = log_level_override {
        settings.log_level = log_level.to_string();
    }
    if let Some(seed) = seed_override {
        settings.seed = Some(seed);
    }
    settings
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level)),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Read post content from a file, the inline argument, or stdin.
pub fn read_content(input: &ContentArgs) -> Result<String> {
    if let Some(path) = &input.file {
        debug!(path = %path.display(), "Reading content from file");
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    match input.content.as_deref() {
        Some("-") | None => {
            debug!("Reading content from stdin");
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
        Some(content) => Ok(content.to_string()),
    }
}

/// Titles one per line, or the whole report as pretty JSON.
pub fn render_suggestions(
    suggester: &TitleSuggester,
    post: &RawPost,
    json: bool,
) -> Result<String> {
    if json {
        let report = suggester
            .try_suggest(post)
            .context("Failed to generate suggestions")?;
        return report.to_json().context("Failed to serialize report");
    }

    let titles = suggester.suggest(post);
    info!(count = titles.len(), "Suggestions ready");
    Ok(titles.join("\n"))
}

pub fn render_classification(result: &ClassificationResult) -> String {
    let mut out = format!(
        "post_type: {}\nquestion_score: {}\nproblem_score: {}\nsharing_score: {}",
        result.post_type, result.question_score, result.problem_score, result.sharing_score
    );
    if !result.matched_indicators.is_empty() {
        out.push_str("\nmatched: ");
        out.push_str(&result.matched_indicators.join(", "));
    }
    out
}

/// Numbered list of ranked phrases.
pub fn render_phrases(phrases: &[String]) -> String {
    phrases
        .iter()
        .enumerate()
        .map(|(i, phrase)| format!("{:>2}. {}", i + 1, phrase))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_config(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings).context("Failed to serialize settings")
}

fn print_block(text: &str) {
    if !text.is_empty() {
        println!("{text}");
    }
}

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref(), cli.log_level.as_deref(), cli.seed)?;
    init_logging(&settings)?;

    let suggester = TitleSuggester::from_settings(&settings);

    match cli.command {
        Commands::Suggest {
            title,
            tags,
            json,
            input,
        } => {
            let post = RawPost {
                content: read_content(&input)?,
                original_title: title,
                tags,
            };
            print_block(&render_suggestions(&suggester, &post, json)?);
        }
        Commands::Classify { title, input } => {
            let post = RawPost {
                content: read_content(&input)?,
                original_title: title,
                tags: None,
            };
            print_block(&render_classification(&suggester.classify(&post)));
        }
        Commands::Phrases { input } => {
            let content = read_content(&input)?;
            print_block(&render_phrases(&suggester.key_phrases(&content)));
        }
        Commands::Config => {
            print!("{}", render_config(&settings)?);
        }
    }

    Ok(())
}
