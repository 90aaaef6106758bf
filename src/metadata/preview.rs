//! Link preview projection of [`Metadata`].

use url::Url;

use super::Metadata;

/// Preview image source and alt text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewImage {
    pub src: Option<String>,
    pub alt: Option<String>,
}

/// Flattened page summary handed to link-card presets.
///
/// Each field takes the first available source: Open Graph, then the
/// document itself, then Twitter Card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPreviewInfo {
    /// `og:url`, or the requested page URL
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub image: PreviewImage,
}

impl LinkPreviewInfo {
    /// Project `metadata` fetched for `url`.
    pub fn new(url: &Url, metadata: &Metadata) -> Self {
        let og = &metadata.open_graph;
        let twitter = &metadata.twitter_card;
        let og_image = og.images.first();
        let twitter_image = twitter.images.first();

        Self {
            url: og.url.clone().unwrap_or_else(|| url.as_str().to_owned()),
            title: og
                .title
                .clone()
                .or_else(|| metadata.title.clone())
                .or_else(|| twitter.title.clone()),
            description: og
                .description
                .clone()
                .or_else(|| metadata.description.clone())
                .or_else(|| twitter.description.clone()),
            favicon: metadata.favicon.clone(),
            image: PreviewImage {
                src: og_image
                    .map(|i| i.url.clone())
                    .or_else(|| twitter_image.map(|i| i.url.clone())),
                alt: og_image
                    .and_then(|i| i.alt.clone())
                    .or_else(|| twitter_image.and_then(|i| i.alt.clone())),
            },
        }
    }

    /// Host name of [`Self::url`], if it parses.
    pub fn hostname(&self) -> Option<String> {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_owned))
    }
}
