//! Prelude module for common imports.
//!
//! ```ignore
//! use tola_embed::prelude::*;
//! ```

// Node types
pub use crate::node::{Children, Link, LinkData, Node, Paragraph, RenderOverride, Root, Text};

// Output
pub use crate::output::{Element, OutputNode};

// Attributes
pub use crate::attr::{PropValue, Properties};

// Transform
pub use crate::transform::{Diagnostic, DiagnosticSink, EmbedOptions, Embedder, SourceFile, Transformer, resolve};

// Capabilities
pub use crate::capability::{Capability, CustomTransformer};

// Metadata
pub use crate::metadata::{LinkPreviewInfo, Metadata, MetadataFetcher, MetadataProvider, OEmbed, OEmbedFetcher};

#[cfg(feature = "http")]
pub use crate::metadata::http::{HttpFetcher, HttpFetcherConfig, TwitterOEmbedFetcher};

// Presets
pub use crate::presets::{HtmlPreset, HtmlPresetOptions, LinkCardPreset, OEmbedOptions};

// Built-in transformers
pub use crate::transformers::{LinkCardTransformer, OEmbedTransformer};

// Convert
pub use crate::convert::parse_fragment;

#[cfg(feature = "markdown")]
pub use crate::convert::{from_markdown, from_mdast};

// Render
pub use crate::render::{RenderConfig, render_nodes, render_root};

// Error
pub use crate::error::{EmbedError, EmbedResult};

// Config
pub use crate::config::EmbedConfig;
