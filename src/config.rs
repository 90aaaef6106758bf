//! Declarative embed configuration.
//!
//! # Example
//!
//! ```toml
//! order = ["oembed", "link-card"]
//!
//! [link_card]
//! class_name_prefix = "card"
//! open_in_new_tab = false
//! image_loading = "eager"
//!
//! [oembed]
//! twitter = true
//! ```

use std::sync::Arc;

use serde::Deserialize;

use crate::error::{EmbedError, EmbedResult};
use crate::metadata::MetadataFetcher;
use crate::presets::{HtmlPresetOptions, OEmbedOptions};
use crate::transform::EmbedOptions;
use crate::transformers::{LinkCardTransformer, OEmbedTransformer};

fn default_order() -> Vec<String> {
    vec![OEmbedTransformer::NAME.to_string(), LinkCardTransformer::NAME.to_string()]
}

/// `[oembed]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OEmbedConfig {
    /// Route Twitter/X status URLs to the publish endpoint (requires `http`)
    pub twitter: bool,
}

/// Built-in transformer selection and options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Transformer names, tried in this order
    pub order: Vec<String>,
    pub link_card: HtmlPresetOptions,
    pub oembed: OEmbedConfig,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
            link_card: HtmlPresetOptions::default(),
            oembed: OEmbedConfig::default(),
        }
    }
}

impl EmbedConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> EmbedResult<Self> {
        toml::from_str(content).map_err(|e| EmbedError::Config(e.to_string()))
    }

    /// Build transformers sharing one `fetcher`.
    ///
    /// Each transformer keeps its own cache. Unknown names are an error.
    pub fn build(&self, fetcher: Arc<dyn MetadataFetcher>) -> EmbedResult<EmbedOptions> {
        let mut options = EmbedOptions::new();
        for name in &self.order {
            options = match name.as_str() {
                OEmbedTransformer::NAME => {
                    options.transformer(OEmbedTransformer::with_options(fetcher.clone(), self.oembed_options()?))
                }
                LinkCardTransformer::NAME => {
                    options.transformer(LinkCardTransformer::with_options(fetcher.clone(), self.link_card.clone()))
                }
                other => return Err(EmbedError::Config(format!("unknown transformer `{other}`"))),
            };
        }
        tracing::debug!(transformers = ?options.names(), "embed options built");
        Ok(options)
    }

    fn oembed_options(&self) -> EmbedResult<OEmbedOptions> {
        let options = OEmbedOptions::default();
        if !self.oembed.twitter {
            return Ok(options);
        }

        #[cfg(feature = "http")]
        return options.with_twitter();

        #[cfg(not(feature = "http"))]
        Err(EmbedError::Config("`oembed.twitter` requires the `http` feature".into()))
    }
}
