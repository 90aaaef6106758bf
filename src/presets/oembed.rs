//! oEmbed preset: per-type renderers and the provider override table.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::attr::PropValue;
use crate::convert::parse_fragment;
use crate::metadata::{OEmbed, OEmbedFetcher, OEmbedLink, OEmbedPhoto, OEmbedRich, OEmbedVideo};
use crate::output::{Element, OutputNode};

/// Renderer for one oEmbed type.
pub type RenderFn<T> = Arc<dyn Fn(&Url, &T, &OEmbedOptions) -> Element + Send + Sync>;

type HtmlFn = Arc<dyn Fn(&str) -> String + Send + Sync>;
type FragmentFn = Arc<dyn Fn(&str) -> Vec<OutputNode> + Send + Sync>;
type UrlPredicate = Arc<dyn Fn(&Url) -> bool + Send + Sync>;

// =============================================================================
// Default renderers
// =============================================================================

/// `img.oembed-photo`
pub fn default_photo(_url: &Url, photo: &OEmbedPhoto, _options: &OEmbedOptions) -> Element {
    h!(
        "img",
        props! {
            "src" => photo.url.as_str(),
            "width" => photo.width,
            "height" => photo.height,
            "alt" => photo.base.title.as_deref(),
            "class" => "oembed-photo",
            "href" => PropValue::Null,
        }
    )
}

/// `div.oembed-video` around the embed markup
pub fn default_video(_url: &Url, video: &OEmbedVideo, options: &OEmbedOptions) -> Element {
    Element {
        children: options.embed_children(&video.html),
        ..h!("div", props! { "class" => "oembed-video", "href" => PropValue::Null })
    }
}

/// `div.oembed-rich` around the embed markup
pub fn default_rich(_url: &Url, rich: &OEmbedRich, options: &OEmbedOptions) -> Element {
    Element {
        children: options.embed_children(&rich.html),
        ..h!("div", props! { "class" => "oembed-rich", "href" => PropValue::Null })
    }
}

/// `a.oembed-link` whose text is the URL
pub fn default_link(url: &Url, _link: &OEmbedLink, _options: &OEmbedOptions) -> Element {
    h!(
        "a",
        props! { "href" => url.as_str(), "class" => "oembed-link" },
        url.as_str()
    )
}

// =============================================================================
// ProviderOverride
// =============================================================================

/// A provider-specific oEmbed source, consulted before page discovery.
#[derive(Clone)]
pub struct ProviderOverride {
    predicate: UrlPredicate,
    fetcher: Arc<dyn OEmbedFetcher>,
}

impl ProviderOverride {
    pub fn new<P>(predicate: P, fetcher: Arc<dyn OEmbedFetcher>) -> Self
    where
        P: Fn(&Url) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            fetcher,
        }
    }

    pub fn applies_to(&self, url: &Url) -> bool {
        (self.predicate)(url)
    }

    pub fn fetcher(&self) -> &Arc<dyn OEmbedFetcher> {
        &self.fetcher
    }
}

impl fmt::Debug for ProviderOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProviderOverride(..)")
    }
}

// =============================================================================
// OEmbedOptions
// =============================================================================

/// Options for the oEmbed transformer.
///
/// Every renderer defaults to the matching `default_*` function; the
/// embed markup of video and rich payloads goes through `post_process` and
/// then the fragment parser.
#[derive(Clone)]
pub struct OEmbedOptions {
    post_process: HtmlFn,
    fragment_parser: FragmentFn,
    photo: RenderFn<OEmbedPhoto>,
    video: RenderFn<OEmbedVideo>,
    rich: RenderFn<OEmbedRich>,
    link: RenderFn<OEmbedLink>,
    providers: Vec<ProviderOverride>,
}

impl Default for OEmbedOptions {
    fn default() -> Self {
        Self {
            post_process: Arc::new(str::to_string),
            fragment_parser: Arc::new(parse_fragment),
            photo: Arc::new(default_photo),
            video: Arc::new(default_video),
            rich: Arc::new(default_rich),
            link: Arc::new(default_link),
            providers: Vec::new(),
        }
    }
}

impl fmt::Debug for OEmbedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OEmbedOptions")
            .field("providers", &self.providers.len())
            .finish_non_exhaustive()
    }
}

impl OEmbedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite embed markup before it is parsed (builder pattern).
    pub fn with_post_process<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.post_process = Arc::new(f);
        self
    }

    /// Replace the HTML fragment parser (builder pattern).
    pub fn with_fragment_parser<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Vec<OutputNode> + Send + Sync + 'static,
    {
        self.fragment_parser = Arc::new(f);
        self
    }

    pub fn with_photo<F>(mut self, f: F) -> Self
    where
        F: Fn(&Url, &OEmbedPhoto, &OEmbedOptions) -> Element + Send + Sync + 'static,
    {
        self.photo = Arc::new(f);
        self
    }

    pub fn with_video<F>(mut self, f: F) -> Self
    where
        F: Fn(&Url, &OEmbedVideo, &OEmbedOptions) -> Element + Send + Sync + 'static,
    {
        self.video = Arc::new(f);
        self
    }

    pub fn with_rich<F>(mut self, f: F) -> Self
    where
        F: Fn(&Url, &OEmbedRich, &OEmbedOptions) -> Element + Send + Sync + 'static,
    {
        self.rich = Arc::new(f);
        self
    }

    pub fn with_link<F>(mut self, f: F) -> Self
    where
        F: Fn(&Url, &OEmbedLink, &OEmbedOptions) -> Element + Send + Sync + 'static,
    {
        self.link = Arc::new(f);
        self
    }

    /// Route URLs matching `predicate` to `fetcher` (builder pattern).
    ///
    /// Overrides are consulted in the order they were added.
    pub fn with_provider<P>(mut self, predicate: P, fetcher: Arc<dyn OEmbedFetcher>) -> Self
    where
        P: Fn(&Url) -> bool + Send + Sync + 'static,
    {
        self.providers.push(ProviderOverride::new(predicate, fetcher));
        self
    }

    /// Route Twitter/X status URLs to the publish endpoint.
    #[cfg(feature = "http")]
    pub fn with_twitter(self) -> crate::error::EmbedResult<Self> {
        let fetcher = crate::metadata::http::TwitterOEmbedFetcher::new()?;
        Ok(self.with_provider(crate::metadata::providers::is_twitter_status_url, Arc::new(fetcher)))
    }

    /// First provider override that applies to `url`.
    pub fn provider_for(&self, url: &Url) -> Option<&ProviderOverride> {
        self.providers.iter().find(|p| p.applies_to(url))
    }

    /// Post-process then parse embed markup.
    pub fn embed_children(&self, html: &str) -> Vec<OutputNode> {
        (self.fragment_parser)(&(self.post_process)(html))
    }

    /// Render a payload with the renderer for its type.
    pub fn render(&self, url: &Url, oembed: &OEmbed) -> Element {
        match oembed {
            OEmbed::Photo(photo) => (self.photo)(url, photo, self),
            OEmbed::Video(video) => (self.video)(url, video, self),
            OEmbed::Rich(rich) => (self.rich)(url, rich, self),
            OEmbed::Link(link) => (self.link)(url, link, self),
        }
    }
}
