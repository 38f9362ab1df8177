//! Rendering of the view state.
//!
//! Renderers are pure functions from a [`ViewState`] to a string. Each state
//! renders exclusively: the loading indicator, the error message, or the
//! attribution line followed by one card per article.
//!
//! # Submodules
//!
//! - [`text`]: Plain terminal output
//! - [`html`]: A standalone HTML page with inline styles

pub mod html;
pub mod text;

use crate::view::{Feed, ViewState};
use clap::ValueEnum;

pub const DEFAULT_TITLE: &str = "🔥 Hottest Tech News";
pub const DEFAULT_SOURCE_LABEL: &str = "Hacker News";
pub const LOADING_MESSAGE: &str = "Loading summaries...";
pub const CACHED_ANNOTATION: &str = "(cached today)";
pub const LINK_TEXT: &str = "Read full article →";

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

/// Static page text that does not come from the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Heading shown above every state.
    pub title: String,
    /// Attribution used when the server does not name its source.
    pub source_label: String,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
        }
    }
}

impl Presentation {
    /// The attribution line for a loaded feed, e.g. `Source: Hacker News (cached today)`.
    pub fn attribution(&self, feed: &Feed) -> String {
        let label = feed.source.as_deref().unwrap_or(&self.source_label);
        if feed.cached {
            format!("Source: {label} {CACHED_ANNOTATION}")
        } else {
            format!("Source: {label}")
        }
    }
}

/// Render `state` in the requested format.
pub fn render(format: OutputFormat, state: &ViewState, presentation: &Presentation) -> String {
    match format {
        OutputFormat::Text => text::render(state, presentation),
        OutputFormat::Html => html::render_page(state, presentation),
    }
}
