//! title-suggest library exports.
//!
//! This crate provides the command-line front end for the title engine.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (suggest, classify, phrases, config)

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, ContentArgs};
pub use commands::{load_settings, read_content, run};
