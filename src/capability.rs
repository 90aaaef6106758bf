//! # Capabilities
//!
//! A transformer capability is either a constant or an async function of the
//! target URL. [`Capability::evaluate`] resolves both the same way, so
//! callers never care which form they were given.
//!
//! [`CustomTransformer`] assembles a [`Transformer`] from four capabilities:
//!
//! ```ignore
//! let gist = CustomTransformer::new(
//!     "gist",
//!     Capability::computed(|url: Url| async move { Ok(url.host_str() == Some("gist.github.com")) }),
//!     "script",
//! )
//! .with_properties(Capability::computed(|url: Url| async move {
//!     Ok(props! { "src" => format!("{url}.js") })
//! }));
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use url::Url;

use crate::attr::Properties;
use crate::error::EmbedResult;
use crate::output::OutputNode;
use crate::transform::Transformer;

/// Future returned by a computed capability.
pub type CapabilityFuture<T> = BoxFuture<'static, EmbedResult<T>>;

type ComputeFn<T> = Arc<dyn Fn(Url) -> CapabilityFuture<T> + Send + Sync>;

// =============================================================================
// Capability
// =============================================================================

/// A constant value or an async function of the URL.
pub enum Capability<T> {
    Constant(T),
    Computed(ComputeFn<T>),
}

impl<T> Capability<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Wrap a constant.
    pub fn constant(value: T) -> Self {
        Self::Constant(value)
    }

    /// Wrap an async function of the URL.
    pub fn computed<F, Fut>(f: F) -> Self
    where
        F: Fn(Url) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = EmbedResult<T>> + Send + 'static,
    {
        Self::Computed(Arc::new(move |url: Url| -> CapabilityFuture<T> { Box::pin(f(url)) }))
    }

    /// Resolve the capability for `url`.
    pub async fn evaluate(&self, url: &Url) -> EmbedResult<T> {
        match self {
            Self::Constant(value) => Ok(value.clone()),
            Self::Computed(f) => f(url.clone()).await,
        }
    }

    /// Check if this is a constant.
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }
}

impl<T: Clone> Clone for Capability<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Constant(value) => Self::Constant(value.clone()),
            Self::Computed(f) => Self::Computed(Arc::clone(f)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Capability<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<T> From<T> for Capability<T> {
    fn from(value: T) -> Self {
        Self::Constant(value)
    }
}

impl From<&str> for Capability<String> {
    fn from(value: &str) -> Self {
        Self::Constant(value.to_string())
    }
}

// =============================================================================
// CustomTransformer
// =============================================================================

/// A [`Transformer`] built from capabilities.
///
/// Properties and children default to empty constants.
#[derive(Debug, Clone)]
pub struct CustomTransformer {
    name: String,
    matches: Capability<bool>,
    tag_name: Capability<String>,
    properties: Capability<Properties>,
    children: Capability<Vec<OutputNode>>,
}

impl CustomTransformer {
    pub fn new(
        name: impl Into<String>,
        matches: impl Into<Capability<bool>>,
        tag_name: impl Into<Capability<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            matches: matches.into(),
            tag_name: tag_name.into(),
            properties: Capability::Constant(Properties::new()),
            children: Capability::Constant(Vec::new()),
        }
    }

    /// Set the properties capability (builder pattern).
    pub fn with_properties(mut self, properties: impl Into<Capability<Properties>>) -> Self {
        self.properties = properties.into();
        self
    }

    /// Set the children capability (builder pattern).
    pub fn with_children(mut self, children: impl Into<Capability<Vec<OutputNode>>>) -> Self {
        self.children = children.into();
        self
    }
}

#[async_trait]
impl Transformer for CustomTransformer {
    fn name(&self) -> &str {
        &self.name
    }

    async fn matches(&self, url: &Url) -> EmbedResult<bool> {
        self.matches.evaluate(url).await
    }

    async fn tag_name(&self, url: &Url) -> EmbedResult<String> {
        self.tag_name.evaluate(url).await
    }

    async fn properties(&self, url: &Url) -> EmbedResult<Properties> {
        self.properties.evaluate(url).await
    }

    async fn children(&self, url: &Url) -> EmbedResult<Vec<OutputNode>> {
        self.children.evaluate(url).await
    }
}
