//! HTML link-card preset.
//!
//! Renders
//!
//! ```html
//! <a class="link-card" href="{url}" target="_blank" rel="noopener noreferrer">
//!   <div class="link-card__container">
//!     <div class="link-card__info">
//!       <div class="link-card__title">{title}</div>
//!       <div class="link-card__description">{description}</div>
//!       <div class="link-card__link">
//!         <img class="link-card__favicon" src="{favicon}" alt="Favicon for {host}" loading="lazy" decoding="async">
//!         <span class="link-card__hostname">{host}</span>
//!       </div>
//!     </div>
//!     <div class="link-card__image">
//!       <img src="{image}" alt="{image alt}" loading="lazy" decoding="async">
//!     </div>
//!   </div>
//! </a>
//! ```
//!
//! The description and image blocks are left out when the page has none.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::attr::Properties;
use crate::metadata::LinkPreviewInfo;
use crate::output::{Element, OutputNode};

use super::LinkCardPreset;

/// Alt text builder for the favicon.
pub type FaviconAlt = Arc<dyn Fn(&LinkPreviewInfo) -> String + Send + Sync>;

/// `loading` attribute of card images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageLoading {
    #[default]
    Lazy,
    Eager,
    Auto,
}

impl ImageLoading {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lazy => "lazy",
            Self::Eager => "eager",
            Self::Auto => "auto",
        }
    }
}

/// `decoding` attribute of card images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDecoding {
    #[default]
    Async,
    Sync,
    Auto,
}

impl ImageDecoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Async => "async",
            Self::Sync => "sync",
            Self::Auto => "auto",
        }
    }
}

fn default_favicon_alt() -> FaviconAlt {
    Arc::new(|info: &LinkPreviewInfo| format!("Favicon for {}", info.hostname().unwrap_or_default()))
}

/// Options for [`HtmlPreset`].
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct HtmlPresetOptions {
    /// Prefix of every class name (default `link-card`)
    pub class_name_prefix: String,
    /// Add `target="_blank"` and `rel="noopener noreferrer"` (default true)
    pub open_in_new_tab: bool,
    #[serde(skip, default = "default_favicon_alt")]
    pub favicon_alt: FaviconAlt,
    pub image_loading: ImageLoading,
    pub image_decoding: ImageDecoding,
}

impl Default for HtmlPresetOptions {
    fn default() -> Self {
        Self {
            class_name_prefix: "link-card".to_string(),
            open_in_new_tab: true,
            favicon_alt: default_favicon_alt(),
            image_loading: ImageLoading::default(),
            image_decoding: ImageDecoding::default(),
        }
    }
}

impl fmt::Debug for HtmlPresetOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlPresetOptions")
            .field("class_name_prefix", &self.class_name_prefix)
            .field("open_in_new_tab", &self.open_in_new_tab)
            .field("image_loading", &self.image_loading)
            .field("image_decoding", &self.image_decoding)
            .finish_non_exhaustive()
    }
}

impl HtmlPresetOptions {
    /// Set the class name prefix (builder pattern).
    pub fn with_class_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_name_prefix = prefix.into();
        self
    }

    /// Set whether the card opens in a new tab (builder pattern).
    pub fn with_open_in_new_tab(mut self, open_in_new_tab: bool) -> Self {
        self.open_in_new_tab = open_in_new_tab;
        self
    }

    /// Set the favicon alt builder (builder pattern).
    pub fn with_favicon_alt<F>(mut self, f: F) -> Self
    where
        F: Fn(&LinkPreviewInfo) -> String + Send + Sync + 'static,
    {
        self.favicon_alt = Arc::new(f);
        self
    }

    pub fn with_image_loading(mut self, loading: ImageLoading) -> Self {
        self.image_loading = loading;
        self
    }

    pub fn with_image_decoding(mut self, decoding: ImageDecoding) -> Self {
        self.image_decoding = decoding;
        self
    }
}

/// Link-card preset producing plain HTML elements.
#[derive(Debug, Clone, Default)]
pub struct HtmlPreset {
    options: HtmlPresetOptions,
}

impl HtmlPreset {
    pub fn new(options: HtmlPresetOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlPresetOptions {
        &self.options
    }

    fn class(&self, part: &str) -> String {
        format!("{}__{part}", self.options.class_name_prefix)
    }

    fn image(&self, src: &str, alt: Option<&str>) -> Element {
        h!(
            "img",
            props! {
                "src" => src,
                "alt" => alt,
                "loading" => self.options.image_loading.as_str(),
                "decoding" => self.options.image_decoding.as_str(),
            }
        )
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl LinkCardPreset for HtmlPreset {
    fn tag_name(&self, _info: &LinkPreviewInfo) -> String {
        "a".to_string()
    }

    fn properties(&self, info: &LinkPreviewInfo) -> Properties {
        let mut props = props! {
            "class" => self.options.class_name_prefix.as_str(),
            "href" => info.url.as_str(),
        };
        if self.options.open_in_new_tab {
            props.set("target", "_blank");
            props.set("rel", "noopener noreferrer");
        }
        props
    }

    fn children(&self, info: &LinkPreviewInfo) -> Vec<OutputNode> {
        let hostname = info.hostname().unwrap_or_default();

        let favicon = h!(
            "img",
            props! {
                "class" => self.class("favicon"),
                "src" => info.favicon.as_deref(),
                "alt" => (self.options.favicon_alt)(info),
                "loading" => self.options.image_loading.as_str(),
                "decoding" => self.options.image_decoding.as_str(),
            }
        );

        let details = h!(
            "div",
            props! { "class" => self.class("info") },
            h!("div", props! { "class" => self.class("title") }, info.title.as_deref()),
            present(&info.description).map(|d| h!("div", props! { "class" => self.class("description") }, d)),
            h!(
                "div",
                props! { "class" => self.class("link") },
                favicon,
                h!("span", props! { "class" => self.class("hostname") }, hostname),
            ),
        );

        let image = present(&info.image.src).map(|src| {
            h!(
                "div",
                props! { "class" => self.class("image") },
                self.image(src, info.image.alt.as_deref()),
            )
        });

        vec![h!("div", props! { "class" => self.class("container") }, details, image).into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::PreviewImage;

    fn info() -> LinkPreviewInfo {
        LinkPreviewInfo {
            url: "https://r4ai.dev/posts/docker_tutorial/".into(),
            title: Some("Docker 入門".into()),
            description: Some("Tech blog by Rai".into()),
            favicon: Some("https://r4ai.dev/favicon.svg".into()),
            image: PreviewImage {
                src: Some("https://r4ai.dev/posts/docker_tutorial/ogimage.png".into()),
                alt: None,
            },
        }
    }

    fn card(preset: &HtmlPreset, info: &LinkPreviewInfo) -> Element {
        let children = preset.children(info);
        assert_eq!(children.len(), 1);
        children[0].as_element().unwrap().clone()
    }

    #[test]
    fn test_link_card_structure() {
        let preset = HtmlPreset::default();
        let info = info();

        assert_eq!(preset.tag_name(&info), "a");
        let props = preset.properties(&info);
        assert_eq!(props.get_str("class"), Some("link-card"));
        assert_eq!(props.get_str("href"), Some("https://r4ai.dev/posts/docker_tutorial/"));
        assert_eq!(props.get_str("target"), Some("_blank"));
        assert_eq!(props.get_str("rel"), Some("noopener noreferrer"));

        let container = card(&preset, &info);
        assert_eq!(container.class(), Some("link-card__container"));
        assert_eq!(
            container.find_by_class("link-card__title").map(Element::text_content).as_deref(),
            Some("Docker 入門")
        );
        assert!(container.find_by_class("link-card__description").is_some());
        assert_eq!(
            container.find_by_class("link-card__hostname").map(Element::text_content).as_deref(),
            Some("r4ai.dev")
        );

        let favicon = container.find_by_class("link-card__favicon").unwrap();
        assert_eq!(favicon.get_prop("alt").and_then(|v| v.as_str()), Some("Favicon for r4ai.dev"));
        assert_eq!(favicon.get_prop("loading").and_then(|v| v.as_str()), Some("lazy"));
        assert_eq!(favicon.get_prop("decoding").and_then(|v| v.as_str()), Some("async"));

        let image = container.find_by_class("link-card__image").unwrap();
        let img = image.children_elements().next().unwrap();
        assert_eq!(img.tag, "img");
        assert_eq!(
            img.get_prop("src").and_then(|v| v.as_str()),
            Some("https://r4ai.dev/posts/docker_tutorial/ogimage.png")
        );
    }

    #[test]
    fn test_title_only_card_drops_optional_blocks() {
        let preset = HtmlPreset::default();
        let info = LinkPreviewInfo {
            url: "https://example.com/".into(),
            title: Some("Example Domain".into()),
            ..LinkPreviewInfo::default()
        };

        let container = card(&preset, &info);
        assert!(container.find_by_class("link-card__title").is_some());
        assert!(container.find_by_class("link-card__description").is_none());
        assert!(container.find_by_class("link-card__image").is_none());
        assert_eq!(container.children.len(), 1);
    }

    #[test]
    fn test_same_tab_has_no_target_or_rel() {
        let preset = HtmlPreset::new(HtmlPresetOptions::default().with_open_in_new_tab(false));
        let props = preset.properties(&info());
        assert!(!props.contains("target"));
        assert!(!props.contains("rel"));
    }

    #[test]
    fn test_custom_options() {
        let preset = HtmlPreset::new(
            HtmlPresetOptions::default()
                .with_class_name_prefix("card")
                .with_favicon_alt(|_| "icon".to_string())
                .with_image_loading(ImageLoading::Eager)
                .with_image_decoding(ImageDecoding::Sync),
        );
        let container = card(&preset, &info());

        assert_eq!(container.class(), Some("card__container"));
        let favicon = container.find_by_class("card__favicon").unwrap();
        assert_eq!(favicon.get_prop("alt").and_then(|v| v.as_str()), Some("icon"));
        assert_eq!(favicon.get_prop("loading").and_then(|v| v.as_str()), Some("eager"));
        assert_eq!(favicon.get_prop("decoding").and_then(|v| v.as_str()), Some("sync"));
    }

    #[test]
    fn test_options_from_toml() {
        let options: HtmlPresetOptions = toml::from_str("class_name_prefix = \"card\"\nimage_loading = \"auto\"").unwrap();
        assert_eq!(options.class_name_prefix, "card");
        assert!(options.open_in_new_tab);
        assert_eq!(options.image_loading, ImageLoading::Auto);
        assert_eq!(options.image_decoding, ImageDecoding::Async);
    }
}
