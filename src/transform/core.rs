//! Core transformer trait.

use async_trait::async_trait;
use url::Url;

use crate::attr::Properties;
use crate::error::EmbedResult;
use crate::output::OutputNode;

/// Pluggable embed strategy.
///
/// The engine calls [`matches`](Self::matches) first; only when it resolves
/// `true` are the three render capabilities evaluated (concurrently). A
/// transformer that fetches metadata in `matches` keeps it in its own cache
/// so the render calls never fetch again.
///
/// # Example
///
/// ```ignore
/// struct Gist;
///
/// #[async_trait]
/// impl Transformer for Gist {
///     fn name(&self) -> &str { "gist" }
///
///     async fn matches(&self, url: &Url) -> EmbedResult<bool> {
///         Ok(url.host_str() == Some("gist.github.com"))
///     }
///
///     async fn tag_name(&self, _url: &Url) -> EmbedResult<String> {
///         Ok("script".into())
///     }
///
///     async fn properties(&self, url: &Url) -> EmbedResult<Properties> {
///         Ok(props! { "src" => format!("{url}.js"), "href" => PropValue::Null })
///     }
/// }
/// ```
#[async_trait]
pub trait Transformer: Send + Sync {
    /// Identity used in diagnostics.
    fn name(&self) -> &str;

    /// Decide whether this transformer claims `url`.
    async fn matches(&self, url: &Url) -> EmbedResult<bool>;

    /// Tag name that replaces `a`.
    async fn tag_name(&self, url: &Url) -> EmbedResult<String>;

    /// Properties merged over the link's existing ones.
    async fn properties(&self, _url: &Url) -> EmbedResult<Properties> {
        Ok(Properties::new())
    }

    /// Replacement body.
    async fn children(&self, _url: &Url) -> EmbedResult<Vec<OutputNode>> {
        Ok(Vec::new())
    }
}
