//! Mock fetchers and metadata fixtures shared by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rustc_hash::{FxHashMap, FxHashSet};
use url::Url;

use crate::error::{EmbedError, EmbedResult};
use crate::metadata::{Metadata, MetadataFetcher, OEmbed, OEmbedFetcher};

/// In-memory [`MetadataFetcher`] counting every call.
///
/// Unknown URLs resolve to `Ok(None)`; URLs registered with
/// [`MockFetcher::failing`] resolve to a fetch error.
#[derive(Debug, Default)]
pub struct MockFetcher {
    pages: FxHashMap<String, Metadata>,
    failing: FxHashSet<String>,
    calls: AtomicUsize,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, metadata: Metadata) -> Self {
        self.pages.insert(canonical(url), metadata);
        self
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(canonical(url));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataFetcher for MockFetcher {
    async fn fetch(&self, url: &Url) -> EmbedResult<Option<Metadata>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(url.as_str()) {
            return Err(EmbedError::fetch(url.as_str(), "connection refused"));
        }
        Ok(self.pages.get(url.as_str()).cloned())
    }
}

/// [`OEmbedFetcher`] answering every request with one payload.
#[derive(Debug)]
pub struct MockOEmbedFetcher {
    payload: serde_json::Value,
    calls: AtomicUsize,
}

impl MockOEmbedFetcher {
    pub fn new(payload: serde_json::Value) -> Self {
        Self {
            payload,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OEmbedFetcher for MockOEmbedFetcher {
    async fn fetch_oembed(&self, url: &Url) -> EmbedResult<Option<OEmbed>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        OEmbed::from_value(self.payload.clone())
            .map(Some)
            .map_err(|e| EmbedError::malformed(url.as_str(), e.to_string()))
    }
}

fn canonical(url: &str) -> String {
    Url::parse(url).map(String::from).unwrap_or_else(|_| url.to_string())
}

pub mod fixtures {
    use serde_json::json;

    use crate::metadata::{MetaImage, Metadata, OpenGraph};

    pub const YOUTUBE_URL: &str = "https://www.youtube.com/watch?v=jNQXAC9IVRw";

    /// Page with Open Graph title, description and image.
    pub fn article() -> Metadata {
        Metadata {
            title: Some("Docker 入門 | r4ai.dev".into()),
            description: Some("Tech blog by Rai".into()),
            favicon: Some("https://r4ai.dev/favicon.svg".into()),
            open_graph: OpenGraph {
                title: Some("Docker 入門".into()),
                description: Some("Learn Docker from scratch".into()),
                url: Some("https://r4ai.dev/posts/docker_tutorial/".into()),
                images: vec![MetaImage {
                    url: "https://r4ai.dev/posts/docker_tutorial/ogimage.png".into(),
                    alt: Some("Docker".into()),
                }],
            },
            ..Metadata::default()
        }
    }

    /// Page with a title only.
    pub fn title_only() -> Metadata {
        Metadata {
            title: Some("Example Domain".into()),
            ..Metadata::default()
        }
    }

    /// YouTube's oEmbed answer for "Me at the zoo".
    pub fn youtube_oembed() -> serde_json::Value {
        json!({
            "type": "video",
            "version": "1.0",
            "title": "Me at the zoo",
            "author_name": "jawed",
            "author_url": "https://www.youtube.com/@jawed",
            "provider_name": "YouTube",
            "provider_url": "https://www.youtube.com/",
            "thumbnail_url": "https://i.ytimg.com/vi/jNQXAC9IVRw/hqdefault.jpg",
            "thumbnail_width": 480,
            "thumbnail_height": 360,
            "width": 200,
            "height": 150,
            "html": "<iframe width=\"200\" height=\"150\" src=\"https://www.youtube.com/embed/jNQXAC9IVRw?feature=oembed\" frameborder=\"0\" allowfullscreen title=\"Me at the zoo\"></iframe>"
        })
    }

    pub fn youtube() -> Metadata {
        Metadata {
            title: Some("Me at the zoo - YouTube".into()),
            oembed: Some(youtube_oembed()),
            ..Metadata::default()
        }
    }

    /// A tweet answered as a rich embed with a null height.
    pub fn tweet_oembed() -> serde_json::Value {
        json!({
            "type": "rich",
            "version": "1.0",
            "author_name": "jack",
            "provider_name": "Twitter",
            "width": 550,
            "height": null,
            "html": "<blockquote class=\"twitter-tweet\"><p>just setting up my twttr</p></blockquote>"
        })
    }

    pub fn photo() -> Metadata {
        Metadata {
            oembed: Some(json!({
                "type": "photo",
                "version": "1.0",
                "title": "A cat",
                "url": "https://images.example/cat.jpg",
                "width": "640",
                "height": "480"
            })),
            ..Metadata::default()
        }
    }
}
