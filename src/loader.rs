//! Feed loading over HTTP.
//!
//! This module performs the single outbound request a view activation makes.
//!
//! # Architecture
//!
//! - [`FeedLoader`]: Trait the view drives; anything that can produce a feed
//! - [`HttpLoader`]: `reqwest`-backed implementation issuing one `GET`
//! - [`LoadError`]: Why a load failed, kept for logging only
//!
//! # Failure Policy
//!
//! Connection failures, non-success statuses, and bodies that are not a valid
//! feed document each map to a [`LoadError`] variant. The view collapses all
//! of them into one user-facing error, so the distinction never reaches the
//! reader. There are no retries and no client-side timeout override.

use crate::models::FeedResponse;
use crate::utils::{looks_truncated, truncate_for_log};
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, instrument, warn};
use url::Url;

/// Errors that can occur while loading the feed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {endpoint} failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: StatusCode },

    #[error("malformed feed body from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Something that can produce one feed per call.
///
/// The returned future must be `Send` because the view runs it on a spawned
/// task.
pub trait FeedLoader: Send + Sync {
    /// Perform exactly one load.
    fn load(&self) -> impl Future<Output = Result<FeedResponse, LoadError>> + Send;
}

/// Loads the feed with a single `GET` against a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpLoader {
    client: Client,
    endpoint: Url,
}

impl HttpLoader {
    /// Create a loader for `endpoint` with a default `reqwest` client.
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

impl FeedLoader for HttpLoader {
    #[instrument(level = "info", skip_all, fields(endpoint = %self.endpoint))]
    async fn load(&self) -> Result<FeedResponse, LoadError> {
        let t0 = Instant::now();
        let endpoint = self.endpoint.to_string();

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|source| LoadError::Network {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { endpoint, status });
        }

        let body = response.bytes().await.map_err(|source| LoadError::Network {
            endpoint: endpoint.clone(),
            source,
        })?;

        let feed = serde_json::from_slice::<FeedResponse>(&body).map_err(|source| {
            warn!(
                truncated = looks_truncated(&source),
                bytes = body.len(),
                body_preview = %truncate_for_log(&String::from_utf8_lossy(&body), 200),
                "Feed body did not decode"
            );
            LoadError::Decode {
                endpoint: endpoint.clone(),
                source,
            }
        })?;

        info!(
            count = feed.articles.len(),
            cached = feed.cached,
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Loaded feed"
        );
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serve `router` on an ephemeral port and return the `/news` URL.
    async fn serve(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Url::parse(&format!("http://{addr}/news")).unwrap()
    }

    #[tokio::test]
    async fn test_load_success_preserves_order_and_flag() {
        let body = r#"{
            "source": "Hacker News",
            "cached": true,
            "articles": [
                {"title": "B", "summary": "b1\nb2", "url": "https://b.example"},
                {"title": "A", "summary": "a1", "url": "https://a.example"}
            ]
        }"#;
        let url = serve(Router::new().route(
            "/news",
            get(move || async move { ([("content-type", "application/json")], body) }),
        ))
        .await;

        let feed = HttpLoader::new(url).load().await.unwrap();
        assert!(feed.cached);
        assert_eq!(feed.source.as_deref(), Some("Hacker News"));
        assert_eq!(feed.articles[0].title, "B");
        assert_eq!(feed.articles[0].summary, "b1\nb2");
        assert_eq!(feed.articles[1].title, "A");
    }

    #[tokio::test]
    async fn test_load_server_error_is_status_failure() {
        let url = serve(Router::new().route(
            "/news",
            get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "Failed to fetch news") }),
        ))
        .await;

        let err = HttpLoader::new(url).load().await.unwrap_err();
        match err {
            LoadError::Status { status, .. } => assert_eq!(status.as_u16(), 500),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_not_found_is_status_failure() {
        let url = serve(Router::new()).await;
        let err = HttpLoader::new(url).load().await.unwrap_err();
        assert!(matches!(err, LoadError::Status { status, .. } if status.as_u16() == 404));
    }

    #[tokio::test]
    async fn test_load_malformed_body_is_decode_failure() {
        let url = serve(Router::new().route(
            "/news",
            get(|| async { "<html>not json</html>" }),
        ))
        .await;

        let err = HttpLoader::new(url).load().await.unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_load_wrong_shape_is_decode_failure() {
        let url = serve(Router::new().route(
            "/news",
            get(|| async { r#"{"articles": "nope", "cached": false}"# }),
        ))
        .await;

        let err = HttpLoader::new(url).load().await.unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_load_connection_refused_is_network_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{addr}/news")).unwrap();
        let err = HttpLoader::new(url).load().await.unwrap_err();
        assert!(matches!(err, LoadError::Network { .. }));
    }

    #[tokio::test]
    async fn test_load_issues_exactly_one_request() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let url = serve(Router::new().route(
            "/news",
            get(move || {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (AxumStatus::SERVICE_UNAVAILABLE, "down")
                }
            }),
        ))
        .await;

        let _ = HttpLoader::new(url).load().await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
