//! Command-line interface definitions for Hot Tech News.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The endpoint can also come from the `NEWS_API_URL` environment variable.

use crate::render::OutputFormat;
use clap::Parser;

/// Command-line arguments for the Hot Tech News client.
///
/// # Examples
///
/// ```sh
/// # Print the feed from the default endpoint
/// hot_tech_news
///
/// # Render an HTML page into ./site/<date>.html
/// hot_tech_news --format html --output-dir ./site
///
/// # Point at another server
/// hot_tech_news -e https://news.example.com/news
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Feed endpoint URL (overrides the config file)
    #[arg(short, long, env = "NEWS_API_URL")]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Directory for the rendered HTML page (HTML format only; stdout otherwise)
    #[arg(short, long)]
    pub output_dir: Option<String>,
}
