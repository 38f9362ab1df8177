//! Data models for the news feed.
//!
//! - [`Article`]: One summarized story as delivered by the feed endpoint
//! - [`FeedResponse`]: The deserialized body of a single `/news` response
//!
//! Both mirror the JSON the endpoint sends. Unknown fields are ignored so the
//! server can grow its payload without breaking the client.

use serde::{Deserialize, Serialize};

/// A single summarized news article.
///
/// Articles are never mutated after they are received. A successful load
/// replaces the whole collection at once.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    /// The article headline.
    pub title: String,
    /// Pre-formatted summary text. Embedded line breaks are significant.
    pub summary: String,
    /// Link to the full story.
    pub url: String,
}

/// The body of one feed response.
///
/// `cached` is opaque to the client: it is displayed, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedResponse {
    /// Articles in the order the server chose.
    pub articles: Vec<Article>,
    /// Whether the server answered from its own cache.
    pub cached: bool,
    /// Attribution label, e.g. `"Hacker News"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_response_deserialization() {
        let json = r#"{
            "articles": [
                {"title": "A", "summary": "line1\nline2", "url": "http://x"}
            ],
            "cached": true
        }"#;

        let feed: FeedResponse = serde_json::from_str(json).unwrap();
        assert!(feed.cached);
        assert_eq!(feed.source, None);
        assert_eq!(feed.articles.len(), 1);
        assert_eq!(feed.articles[0].title, "A");
        assert_eq!(feed.articles[0].summary, "line1\nline2");
        assert_eq!(feed.articles[0].url, "http://x");
    }

    #[test]
    fn test_feed_response_with_source_and_extra_fields() {
        let json = r#"{
            "source": "Hacker News",
            "cached": false,
            "generated_at": "2025-05-06",
            "articles": []
        }"#;

        let feed: FeedResponse = serde_json::from_str(json).unwrap();
        assert_eq!(feed.source.as_deref(), Some("Hacker News"));
        assert!(!feed.cached);
        assert!(feed.articles.is_empty());
    }

    #[test]
    fn test_feed_response_preserves_order() {
        let json = r#"{
            "articles": [
                {"title": "zeta", "summary": "", "url": "https://z.example"},
                {"title": "alpha", "summary": "", "url": "https://a.example"},
                {"title": "mid", "summary": "", "url": "https://m.example"}
            ],
            "cached": false
        }"#;

        let feed: FeedResponse = serde_json::from_str(json).unwrap();
        let titles: Vec<&str> = feed.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_feed_response_rejects_missing_cached_flag() {
        let json = r#"{"articles": []}"#;
        assert!(serde_json::from_str::<FeedResponse>(json).is_err());
    }

    #[test]
    fn test_article_rejects_wrong_types() {
        let json = r#"{"title": 1, "summary": "s", "url": "u"}"#;
        assert!(serde_json::from_str::<Article>(json).is_err());
    }
}
