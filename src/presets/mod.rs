//! Rendering presets.
//!
//! A preset turns fetched metadata into output markup:
//!
//! - [`HtmlPreset`] renders a [`LinkPreviewInfo`] as a link card
//! - [`OEmbedOptions`] renders an [`OEmbed`](crate::metadata::OEmbed)
//!   payload per type, with an optional provider override table

mod html;
pub mod oembed;

pub use html::{FaviconAlt, HtmlPreset, HtmlPresetOptions, ImageDecoding, ImageLoading};
pub use oembed::{OEmbedOptions, ProviderOverride};

use crate::attr::Properties;
use crate::metadata::LinkPreviewInfo;
use crate::output::OutputNode;

/// Link-card rendering strategy.
pub trait LinkCardPreset: Send + Sync {
    fn tag_name(&self, info: &LinkPreviewInfo) -> String;

    fn properties(&self, info: &LinkPreviewInfo) -> Properties;

    fn children(&self, info: &LinkPreviewInfo) -> Vec<OutputNode>;
}
