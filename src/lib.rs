//! tola-embed - Embed bare links in markdown trees
//!
//! ## Core Concepts
//!
//! **Bare links**: a link that is the only child of a paragraph and whose
//! text is its own URL (`<https://example.com>` or a GFM literal URL) is
//! eligible for embedding. Every other link is left alone.
//!
//! **Transformers**: pluggable strategies tried in order per link. The first
//! whose `matches` answers `true` and whose render succeeds replaces the
//! link's output with its tag name, properties and children.
//!
//! ## Modules
//! - `transform`: `Transformer` trait, resolution engine, diagnostics
//! - `transformers`: built-in oEmbed and link-card transformers
//! - `metadata`: page metadata, oEmbed payloads, fetchers
//! - `presets`: link-card HTML preset and oEmbed renderers
//! - `node` / `output`: input document tree and transformer output
//! - `convert`: markdown and HTML fragment adapters
//! - `render`: HTML rendering of embedded documents
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use tola_embed::prelude::*;
//!
//! let fetcher = Arc::new(HttpFetcher::new()?);
//! let embedder = Embedder::new(
//!     EmbedOptions::new()
//!         .transformer(OEmbedTransformer::new(fetcher.clone()))
//!         .transformer(LinkCardTransformer::html(fetcher)),
//! );
//!
//! let mut root = from_markdown("<https://www.youtube.com/watch?v=jNQXAC9IVRw>")?;
//! let mut file = SourceFile::with_path("post.md");
//! embedder.run(&mut root, &mut file).await;
//!
//! let html = render_root(&root, &RenderConfig::default());
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Core modules
// =============================================================================

/// Input document tree: Root, Paragraph, Link, Text
pub mod node;

/// Transformer output: Element, OutputNode
pub mod output;

/// Property types
pub mod attr;

/// Source position information
pub mod span;

/// Error types
pub mod error;

/// Per-transformer metadata caches
pub mod cache;

/// Resolution engine: Transformer, Embedder, diagnostics
pub mod transform;

/// Capability values and closure-built transformers
pub mod capability;

/// Page metadata and fetchers
pub mod metadata;

/// Rendering presets
pub mod presets;

/// Built-in transformers
pub mod transformers;

/// Markdown and HTML adapters
pub mod convert;

/// HTML rendering
pub mod render;

/// TOML configuration
pub mod config;

/// Prelude for common imports
pub mod prelude;

#[cfg(test)]
mod test_util;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Children, Link, LinkData, Node, Paragraph, RenderOverride, Root, Text};

// Output
pub use output::{Element, OutputNode};

// Attribute types
pub use attr::{PropValue, Properties};

// Span
pub use span::{Point, Position};

// Error types
pub use error::{EmbedError, EmbedResult};

// Transform
pub use transform::{Diagnostic, DiagnosticSink, EmbedOptions, Embedder, SourceFile, Transformer};

// Capabilities
pub use capability::{Capability, CustomTransformer};

// Built-in transformers
pub use transformers::{LinkCardTransformer, OEmbedTransformer};

// Config
pub use config::EmbedConfig;
