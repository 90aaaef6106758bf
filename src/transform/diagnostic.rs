//! Diagnostics reported by the embed engine.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::EmbedError;
use crate::span::Position;

/// Origin tag attached to every diagnostic this crate emits.
pub const DIAGNOSTIC_ORIGIN: &str = "tola-embed";

/// A non-fatal message about one link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Diagnostic {
    /// Rendered message
    pub message: String,
    /// Span of the link, when the parser recorded one
    pub position: Option<Position>,
    /// Always [`DIAGNOSTIC_ORIGIN`] for engine diagnostics
    pub origin: String,
    /// Name of the transformer that failed
    pub transformer: String,
    /// Link URL as written in the document
    pub url: String,
}

impl Diagnostic {
    /// Diagnostic for a transformer that failed on a link.
    ///
    /// Message shape:
    /// `[transformer:{name}] Failed to embed {url} in {path} at line {line}.; {error}`
    /// where a missing path or line is written as `unknown`.
    pub fn embed_failure(
        transformer: &str,
        url: &str,
        file_path: Option<&str>,
        position: Option<Position>,
        error: &EmbedError,
    ) -> Self {
        let line = position.map_or_else(|| "unknown".to_string(), |p| p.start_line().to_string());
        let message = format!(
            "[transformer:{transformer}] Failed to embed {url} in {path} at line {line}.; {error}",
            path = file_path.unwrap_or("unknown"),
            error = error.to_json(),
        );
        Self {
            message,
            position,
            origin: DIAGNOSTIC_ORIGIN.to_string(),
            transformer: transformer.to_string(),
            url: url.to_string(),
        }
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Receiver for diagnostics, usually the file being processed.
pub trait DiagnosticSink {
    /// Path of the document, used in messages.
    fn file_path(&self) -> Option<&str> {
        None
    }

    /// Accept one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// A processed file: optional path plus the diagnostics attached to it.
#[derive(Debug, Clone, Default)]
pub struct SourceFile {
    path: Option<PathBuf>,
    display_path: Option<String>,
    messages: Vec<Diagnostic>,
}

impl SourceFile {
    /// A file without a path.
    pub fn new() -> Self {
        Self::default()
    }

    /// A file at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            display_path: Some(path.display().to_string()),
            path: Some(path),
            messages: Vec::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Diagnostics in the order they were reported.
    pub fn messages(&self) -> &[Diagnostic] {
        &self.messages
    }

    /// Diagnostics raised by one transformer.
    pub fn by_transformer<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.messages.iter().filter(move |d| d.transformer == name)
    }

    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }

    /// Take the collected diagnostics.
    pub fn into_messages(self) -> Vec<Diagnostic> {
        self.messages
    }
}

impl DiagnosticSink for SourceFile {
    fn file_path(&self) -> Option<&str> {
        self.display_path.as_deref()
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.messages.push(diagnostic);
    }
}
