//! Link-card transformer.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::attr::Properties;
use crate::error::{EmbedError, EmbedResult};
use crate::metadata::{LinkPreviewInfo, MetadataFetcher, MetadataProvider};
use crate::output::OutputNode;
use crate::presets::{HtmlPreset, HtmlPresetOptions, LinkCardPreset};
use crate::transform::Transformer;

/// Claims every link whose page yields metadata and renders it with a
/// [`LinkCardPreset`].
pub struct LinkCardTransformer {
    provider: MetadataProvider,
    preset: Arc<dyn LinkCardPreset>,
}

impl LinkCardTransformer {
    pub const NAME: &'static str = "link-card";

    pub fn new<P>(fetcher: Arc<dyn MetadataFetcher>, preset: P) -> Self
    where
        P: LinkCardPreset + 'static,
    {
        Self {
            provider: MetadataProvider::new(fetcher),
            preset: Arc::new(preset),
        }
    }

    /// Link cards rendered by the default [`HtmlPreset`].
    pub fn html(fetcher: Arc<dyn MetadataFetcher>) -> Self {
        Self::new(fetcher, HtmlPreset::default())
    }

    /// Link cards rendered by an [`HtmlPreset`] with `options`.
    pub fn with_options(fetcher: Arc<dyn MetadataFetcher>, options: HtmlPresetOptions) -> Self {
        Self::new(fetcher, HtmlPreset::new(options))
    }

    pub fn provider(&self) -> &MetadataProvider {
        &self.provider
    }

    fn info(&self, url: &Url) -> EmbedResult<LinkPreviewInfo> {
        self.provider
            .cached(url)
            .map(|metadata| LinkPreviewInfo::new(url, &metadata))
            .ok_or_else(|| EmbedError::MissingMetadata(url.to_string()))
    }
}

impl std::fmt::Debug for LinkCardTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkCardTransformer")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transformer for LinkCardTransformer {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn matches(&self, url: &Url) -> EmbedResult<bool> {
        Ok(self.provider.get(url).await?.is_some())
    }

    async fn tag_name(&self, url: &Url) -> EmbedResult<String> {
        Ok(self.preset.tag_name(&self.info(url)?))
    }

    async fn properties(&self, url: &Url) -> EmbedResult<Properties> {
        Ok(self.preset.properties(&self.info(url)?))
    }

    async fn children(&self, url: &Url) -> EmbedResult<Vec<OutputNode>> {
        Ok(self.preset.children(&self.info(url)?))
    }
}
