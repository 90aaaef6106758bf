//! Plugin-shaped entry point.
//!
//! - `EmbedOptions`: ordered transformer list (empty by default)
//! - `Embedder`: runs one resolution pass per document

use std::fmt;
use std::sync::Arc;

use crate::node::Root;

use super::{DiagnosticSink, Transformer, resolve};

// =============================================================================
// EmbedOptions
// =============================================================================

/// Options for [`Embedder`].
///
/// Transformers are tried in the order given; the first whose `matches`
/// resolves `true` and whose render succeeds decides a link's output.
#[derive(Clone, Default)]
pub struct EmbedOptions {
    pub transformers: Vec<Arc<dyn Transformer>>,
}

impl EmbedOptions {
    /// Create options with no transformers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transformer (builder pattern).
    pub fn transformer<T>(mut self, transformer: T) -> Self
    where
        T: Transformer + 'static,
    {
        self.transformers.push(Arc::new(transformer));
        self
    }

    /// Append a shared transformer (builder pattern).
    pub fn shared(mut self, transformer: Arc<dyn Transformer>) -> Self {
        self.transformers.push(transformer);
        self
    }

    /// Conditionally append a transformer.
    pub fn transformer_if<T>(self, condition: bool, transformer: T) -> Self
    where
        T: Transformer + 'static,
    {
        if condition {
            self.transformer(transformer)
        } else {
            self
        }
    }

    /// Names of the configured transformers, in order.
    pub fn names(&self) -> Vec<&str> {
        self.transformers.iter().map(|t| t.name()).collect()
    }
}

impl fmt::Debug for EmbedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbedOptions")
            .field("transformers", &self.names())
            .finish()
    }
}

// =============================================================================
// Embedder
// =============================================================================

/// Embeds bare links of documents.
///
/// Transformer caches live as long as the transformers, so one `Embedder`
/// reused across documents fetches each URL once.
///
/// # Example
///
/// ```ignore
/// let embedder = Embedder::new(
///     EmbedOptions::new()
///         .transformer(OEmbedTransformer::new(fetcher.clone()))
///         .transformer(LinkCardTransformer::html(fetcher)),
/// );
///
/// let mut file = SourceFile::with_path("post.md");
/// embedder.run(&mut root, &mut file).await;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Embedder {
    options: EmbedOptions,
}

impl Embedder {
    #[inline]
    pub fn new(options: EmbedOptions) -> Self {
        Self { options }
    }

    /// Resolve every bare link in `root`, reporting failures to `sink`.
    pub async fn run<S>(&self, root: &mut Root, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        resolve(root, &self.options.transformers, sink).await;
    }

    #[inline]
    pub fn options(&self) -> &EmbedOptions {
        &self.options
    }
}

impl From<EmbedOptions> for Embedder {
    #[inline]
    fn from(options: EmbedOptions) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CustomTransformer;
    use crate::node::{Link, Paragraph};
    use crate::transform::SourceFile;

    #[test]
    fn test_options_order() {
        let options = EmbedOptions::new()
            .transformer(CustomTransformer::new("first", false, "div"))
            .transformer_if(false, CustomTransformer::new("skipped", true, "div"))
            .transformer(CustomTransformer::new("second", true, "div"));

        assert_eq!(options.names(), ["first", "second"]);
        assert!(EmbedOptions::default().transformers.is_empty());
    }

    #[tokio::test]
    async fn test_default_embedder_is_a_no_op() {
        let mut root = Root::new([Paragraph::new([Link::autolink("https://example.com").into()]).into()]);
        let before = root.clone();
        let mut file = SourceFile::new();

        Embedder::default().run(&mut root, &mut file).await;

        assert_eq!(root, before);
        assert!(file.is_clean());
    }

    #[tokio::test]
    async fn test_run_embeds() {
        let embedder = Embedder::new(EmbedOptions::new().transformer(CustomTransformer::new("t", true, "section")));
        let mut root = Root::new([Paragraph::new([Link::autolink("https://example.com").into()]).into()]);

        embedder.run(&mut root, &mut SourceFile::new()).await;

        assert!(root.links().all(Link::is_embedded));
    }

    #[test]
    fn test_run_future_is_send() {
        fn assert_send<T: Send>(_: &T) {}
        let embedder = Embedder::default();
        let mut root = Root::default();
        let mut file = SourceFile::new();
        assert_send(&embedder.run(&mut root, &mut file));
    }
}
