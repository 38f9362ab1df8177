//! View state for the feed.

use crate::loader::LoadError;
use crate::models::{Article, FeedResponse};
use tracing::warn;

/// The only message a reader ever sees when the feed fails to load.
pub const LOAD_ERROR_MESSAGE: &str = "Could not load news.";

/// A successfully loaded feed, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub articles: Vec<Article>,
    pub cached: bool,
    pub source: Option<String>,
}

impl From<FeedResponse> for Feed {
    fn from(response: FeedResponse) -> Self {
        Self {
            articles: response.articles,
            cached: response.cached,
            source: response.source,
        }
    }
}

/// What the view is currently showing. Exactly one phase is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Error {
        message: String,
    },
    Ready(Feed),
}

impl ViewState {
    /// Terminal state for a finished load.
    ///
    /// Every failure collapses to [`LOAD_ERROR_MESSAGE`]; the cause is logged
    /// here and goes no further.
    pub fn resolve(outcome: Result<FeedResponse, LoadError>) -> Self {
        match outcome {
            Ok(response) => ViewState::Ready(response.into()),
            Err(e) => {
                warn!(error = %e, "Feed unavailable");
                ViewState::Error {
                    message: LOAD_ERROR_MESSAGE.to_string(),
                }
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}
