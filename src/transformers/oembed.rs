//! oEmbed transformer.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::attr::Properties;
use crate::cache::{CacheEntry, MetadataCache};
use crate::error::EmbedResult;
use crate::metadata::{MetadataFetcher, OEmbed};
use crate::output::{Element, OutputNode};
use crate::presets::OEmbedOptions;
use crate::transform::Transformer;

/// Claims every link with an oEmbed document and renders it per type.
///
/// A provider override from [`OEmbedOptions`] answers first; otherwise the
/// document comes from the page metadata.
pub struct OEmbedTransformer {
    fetcher: Arc<dyn MetadataFetcher>,
    options: OEmbedOptions,
    cache: MetadataCache<OEmbed>,
}

impl OEmbedTransformer {
    pub const NAME: &'static str = "oembed";

    pub fn new(fetcher: Arc<dyn MetadataFetcher>) -> Self {
        Self::with_options(fetcher, OEmbedOptions::default())
    }

    pub fn with_options(fetcher: Arc<dyn MetadataFetcher>, options: OEmbedOptions) -> Self {
        Self {
            fetcher,
            options,
            cache: MetadataCache::new(),
        }
    }

    pub fn options(&self) -> &OEmbedOptions {
        &self.options
    }

    pub fn cache(&self) -> &MetadataCache<OEmbed> {
        &self.cache
    }

    async fn lookup(&self, url: &Url) -> EmbedResult<Option<OEmbed>> {
        if let Some(provider) = self.options.provider_for(url) {
            tracing::trace!(url = %url, "oembed provider override");
            return provider.fetcher().fetch_oembed(url).await;
        }
        match self.fetcher.fetch(url).await? {
            Some(metadata) => metadata.oembed(url),
            None => Ok(None),
        }
    }

    /// Rendered element for a cached payload.
    ///
    /// `None` when nothing is cached, in which case every capability
    /// answers with an empty `div`.
    fn element(&self, url: &Url) -> Option<Element> {
        self.cache
            .get(url)
            .and_then(CacheEntry::into_option)
            .map(|oembed| self.options.render(url, &oembed))
    }
}

impl std::fmt::Debug for OEmbedTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OEmbedTransformer")
            .field("options", &self.options)
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transformer for OEmbedTransformer {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn matches(&self, url: &Url) -> EmbedResult<bool> {
        let entry = self.cache.get_or_fetch(url, || self.lookup(url)).await?;
        Ok(entry.is_found())
    }

    async fn tag_name(&self, url: &Url) -> EmbedResult<String> {
        Ok(self.element(url).map_or_else(|| "div".to_string(), |e| e.tag))
    }

    async fn properties(&self, url: &Url) -> EmbedResult<Properties> {
        Ok(self.element(url).map(|e| e.properties).unwrap_or_default())
    }

    async fn children(&self, url: &Url) -> EmbedResult<Vec<OutputNode>> {
        Ok(self.element(url).map(|e| e.children).unwrap_or_default())
    }
}
