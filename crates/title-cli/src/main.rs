//! title-suggest
//!
//! Suggests forum post titles from the post body, original title and tags.
//!
//! # Usage
//!
//! ```bash
//! title-suggest suggest [--title T] [--tags a,b] [--json] [--file F | CONTENT]
//! title-suggest classify [--title T] [--file F | CONTENT]
//! title-suggest phrases [--file F | CONTENT]
//! title-suggest config
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/title-suggest/config.toml)
//! 3. Explicit `--config` file
//! 4. Environment variables (TITLES_*)
//! 5. CLI flags

use anyhow::Result;
use clap::Parser;

use title_cli::{run, Cli};

fn main() -> Result<()> {
    run(Cli::parse())
}
