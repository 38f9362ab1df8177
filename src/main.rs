//! # Hot Tech News
//!
//! A client for a pre-summarized tech news feed. It fetches the feed once
//! from a single HTTP endpoint and renders it as terminal text or as a
//! standalone HTML page.
//!
//! ## Usage
//!
//! ```sh
//! hot_tech_news -e http://localhost:8000/news
//! hot_tech_news --format html --output-dir ./site
//! ```
//!
//! ## Architecture
//!
//! 1. **Configuration**: YAML file (optional) overridden by CLI flags
//! 2. **Activation**: the feed view enters `Loading` and spawns one load
//! 3. **Loading**: a single `GET` yields the feed or a failure
//! 4. **Rendering**: each state change is rendered; `Ready` and `Error` are terminal

use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod loader;
mod models;
mod outputs;
mod render;
mod utils;
mod view;

use cli::Cli;
use config::AppConfig;
use loader::HttpLoader;
use render::OutputFormat;
use view::{FeedView, ViewState};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("hot_tech_news starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Configuration ----
    let mut config = match args.config.as_deref() {
        Some(path) => AppConfig::load(Path::new(path))?,
        None => AppConfig::default(),
    };
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    let endpoint = config.endpoint_url()?;
    let presentation = config.presentation();
    info!(%endpoint, format = ?args.format, "Configuration resolved");

    if args.output_dir.is_some() && args.format != OutputFormat::Html {
        warn!("--output-dir is ignored unless --format html");
    }

    // ---- Activate the view and render each transition ----
    let loader = Arc::new(HttpLoader::new(endpoint));
    let mut view = FeedView::new();

    let final_state = match args.format {
        OutputFormat::Text => {
            let mut stdout = std::io::stdout().lock();
            render::text::present_feed(&mut view, loader, &presentation, &mut stdout)
                .await?
        }
        OutputFormat::Html => {
            view.activate(loader);
            let state = view.settled().await.unwrap_or_default();
            let page = render::render(args.format, &state, &presentation);
            match args.output_dir.as_deref() {
                Some(dir) => {
                    let path = outputs::html::write_page(&page, dir).await?;
                    info!(path = %path.display(), "Page ready");
                }
                None => print!("{page}"),
            }
            state
        }
    };
    view.deactivate();

    let elapsed = start_time.elapsed();
    match &final_state {
        ViewState::Ready(feed) => info!(
            articles = feed.articles.len(),
            cached = feed.cached,
            millis = elapsed.as_millis() as u64,
            "Execution complete"
        ),
        ViewState::Error { .. } => warn!(
            millis = elapsed.as_millis() as u64,
            "Execution complete; feed unavailable"
        ),
        ViewState::Loading => warn!("View stopped before the feed settled"),
    }

    Ok(())
}
