//! Link resolution engine.
//!
//! # Module Structure
//!
//! - `Transformer` - Core trait for embed strategies
//! - `resolve` - One concurrent pass over a document's bare links
//! - `Embedder` / `EmbedOptions` - Plugin-shaped entry point
//! - `Diagnostic` / `DiagnosticSink` / `SourceFile` - Non-fatal failure reporting
//!
//! # Example
//!
//! ```ignore
//! use tola_embed::transform::{Embedder, EmbedOptions, SourceFile};
//!
//! let embedder = Embedder::new(EmbedOptions::new().transformer(OEmbedTransformer::new(fetcher)));
//! let mut file = SourceFile::with_path("index.md");
//! embedder.run(&mut root, &mut file).await;
//!
//! for diagnostic in file.messages() {
//!     eprintln!("{diagnostic}");
//! }
//! ```

mod core;
mod diagnostic;
mod pipeline;
mod resolve;

pub use self::core::Transformer;
pub use self::diagnostic::{DIAGNOSTIC_ORIGIN, Diagnostic, DiagnosticSink, SourceFile};
pub use self::pipeline::{EmbedOptions, Embedder};
pub use self::resolve::resolve;
