//! Page metadata: the raw provider shape, projections and fetcher seams.
//!
//! # Components
//!
//! - [`Metadata`] - document title/description/favicon, Open Graph, Twitter
//!   Card and the raw oEmbed JSON, as a provider returns it
//! - [`LinkPreviewInfo`] - flattened projection used by link-card presets
//! - [`OEmbed`] - typed oEmbed payload (photo, video, link or rich)
//! - [`MetadataFetcher`] / [`OEmbedFetcher`] - async fetch seams
//! - [`MetadataProvider`] - fetcher plus per-instance cache

pub mod extract;
#[cfg(feature = "http")]
pub mod http;
pub mod oembed;
mod preview;
pub mod providers;

pub use oembed::{OEmbed, OEmbedBase, OEmbedLink, OEmbedPhoto, OEmbedRich, OEmbedVideo};
pub use preview::{LinkPreviewInfo, PreviewImage};

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::cache::{CacheEntry, MetadataCache};
use crate::error::{EmbedError, EmbedResult};

// =============================================================================
// Metadata shapes
// =============================================================================

/// Image advertised by Open Graph or Twitter Card tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaImage {
    pub url: String,
    pub alt: Option<String>,
}

impl MetaImage {
    /// Create an image without alt text.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
        }
    }
}

/// `og:*` properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraph {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub images: Vec<MetaImage>,
}

/// `twitter:*` properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterCard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Vec<MetaImage>,
}

/// Metadata of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Document `<title>`
    pub title: Option<String>,
    /// `<meta name="description">`
    pub description: Option<String>,
    /// Absolute favicon URL
    pub favicon: Option<String>,
    pub open_graph: OpenGraph,
    pub twitter_card: TwitterCard,
    /// Raw oEmbed document, validated lazily by [`Metadata::oembed`]
    #[serde(rename = "oEmbed", alias = "oembed")]
    pub oembed: Option<serde_json::Value>,
}

impl Metadata {
    /// Decode the raw oEmbed document of `url`.
    ///
    /// Returns `Ok(None)` when the page has no oEmbed document and
    /// [`EmbedError::Malformed`] when it exists but does not fit any type.
    pub fn oembed(&self, url: &Url) -> EmbedResult<Option<OEmbed>> {
        match &self.oembed {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(raw) => OEmbed::from_value(raw.clone())
                .map(Some)
                .map_err(|e| EmbedError::malformed(url.as_str(), e.to_string())),
        }
    }
}

// =============================================================================
// Fetchers
// =============================================================================

/// Source of page metadata.
///
/// `Ok(None)` means the page exists but offers nothing to embed.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> EmbedResult<Option<Metadata>>;
}

/// Source of oEmbed documents for a specific provider.
#[async_trait]
pub trait OEmbedFetcher: Send + Sync {
    async fn fetch_oembed(&self, url: &Url) -> EmbedResult<Option<OEmbed>>;
}

// =============================================================================
// MetadataProvider
// =============================================================================

/// Metadata fetcher with a cache scoped to its owner.
pub struct MetadataProvider {
    fetcher: Arc<dyn MetadataFetcher>,
    cache: MetadataCache<Metadata>,
}

impl MetadataProvider {
    /// Create a provider with an empty cache.
    pub fn new(fetcher: Arc<dyn MetadataFetcher>) -> Self {
        Self {
            fetcher,
            cache: MetadataCache::new(),
        }
    }

    /// Metadata for `url`, fetching at most once per URL.
    pub async fn get(&self, url: &Url) -> EmbedResult<Option<Arc<Metadata>>> {
        self.cache
            .get_or_fetch(url, || self.fetcher.fetch(url))
            .await
            .map(CacheEntry::into_option)
    }

    /// Previously fetched metadata for `url`, without fetching.
    pub fn cached(&self, url: &Url) -> Option<Arc<Metadata>> {
        self.cache.get(url).and_then(CacheEntry::into_option)
    }

    /// The underlying cache.
    pub fn cache(&self) -> &MetadataCache<Metadata> {
        &self.cache
    }
}

impl std::fmt::Debug for MetadataProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataProvider")
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{MockFetcher, fixtures};

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_metadata_deserializes_provider_shape() {
        let metadata: Metadata = serde_json::from_value(serde_json::json!({
            "title": "Docs",
            "open_graph": { "title": "OG Docs", "images": [{ "url": "https://example.com/og.png" }] },
            "oEmbed": { "type": "link", "version": "1.0" }
        }))
        .unwrap();

        assert_eq!(metadata.title.as_deref(), Some("Docs"));
        assert_eq!(metadata.open_graph.images[0].url, "https://example.com/og.png");
        assert!(metadata.twitter_card.images.is_empty());
        assert!(matches!(
            metadata.oembed(&url("https://example.com/")),
            Ok(Some(OEmbed::Link(_)))
        ));
    }

    #[test]
    fn test_malformed_oembed_is_an_error() {
        let metadata = Metadata {
            oembed: Some(serde_json::json!({ "type": "video", "width": 10 })),
            ..Metadata::default()
        };
        let err = metadata.oembed(&url("https://example.com/")).unwrap_err();
        assert_eq!(err.kind(), "malformed");
    }

    #[test]
    fn test_null_oembed_is_absent() {
        let metadata = Metadata {
            oembed: Some(serde_json::Value::Null),
            ..Metadata::default()
        };
        assert!(metadata.oembed(&url("https://example.com/")).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_provider_fetches_once() {
        let fetcher = Arc::new(MockFetcher::new().with("https://example.com/", fixtures::article()));
        let provider = MetadataProvider::new(fetcher.clone());
        let target = url("https://example.com/");

        let first = provider.get(&target).await.unwrap();
        let second = provider.get(&target).await.unwrap();

        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(fetcher.calls(), 1);
        assert!(provider.cached(&target).is_some());
    }

    #[tokio::test]
    async fn test_provider_caches_absence() {
        let fetcher = Arc::new(MockFetcher::new());
        let provider = MetadataProvider::new(fetcher.clone());
        let target = url("https://nothing.example/");

        assert!(provider.get(&target).await.unwrap().is_none());
        assert!(provider.get(&target).await.unwrap().is_none());
        assert_eq!(fetcher.calls(), 1);
    }
}
