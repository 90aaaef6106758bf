//! Metadata extraction from an HTML document.
//!
//! Reads the document title, `<meta name="description">`, `og:*` and
//! `twitter:*` tags, the favicon link and the oEmbed JSON discovery link.
//! Relative URLs are resolved against the page URL.

use scraper::{Html, Selector};
use url::Url;

use super::{MetaImage, Metadata};

/// Result of [`extract`]: page metadata plus the oEmbed endpoint, if advertised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedPage {
    pub metadata: Metadata,
    /// `<link rel="alternate" type="application/json+oembed">` target
    pub oembed_endpoint: Option<Url>,
}

/// Extract metadata and the oEmbed discovery link from `html`.
pub fn extract(html: &str, page_url: &Url) -> ExtractedPage {
    let document = Html::parse_document(html);

    let mut metadata = Metadata {
        title: text_of(&document, "title"),
        description: meta_content(&document, r#"meta[name="description"]"#),
        favicon: attr_of(&document, r#"link[rel~="icon"]"#, "href").and_then(|href| resolve(page_url, &href)),
        ..Metadata::default()
    };

    let og = &mut metadata.open_graph;
    og.title = meta_content(&document, r#"meta[property="og:title"]"#);
    og.description = meta_content(&document, r#"meta[property="og:description"]"#);
    og.url = meta_content(&document, r#"meta[property="og:url"]"#).and_then(|u| resolve(page_url, &u));
    og.images = images(&document, "property", "og:image", page_url);

    let twitter = &mut metadata.twitter_card;
    twitter.title = meta_content(&document, r#"meta[name="twitter:title"]"#);
    twitter.description = meta_content(&document, r#"meta[name="twitter:description"]"#);
    twitter.images = images(&document, "name", "twitter:image", page_url);

    let oembed_endpoint = attr_of(&document, r#"link[type="application/json+oembed"]"#, "href")
        .and_then(|href| page_url.join(&href).ok());

    ExtractedPage {
        metadata,
        oembed_endpoint,
    }
}

/// Extract only the page metadata.
pub fn extract_metadata(html: &str, page_url: &Url) -> Metadata {
    extract(html, page_url).metadata
}

fn resolve(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(String::from)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn text_of(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = document.select(&selector).next()?;
    non_empty(&element.text().collect::<String>())
}

fn attr_of(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .find_map(|el| el.value().attr(attr).and_then(non_empty))
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    attr_of(document, selector, "content")
}

/// Collect `{prefix}` / `{prefix}:url` images in document order, attaching
/// each `{prefix}:alt` to the image before it.
fn images(document: &Html, key_attr: &str, prefix: &str, page_url: &Url) -> Vec<MetaImage> {
    let Ok(selector) = Selector::parse(&format!("meta[{key_attr}]")) else {
        return Vec::new();
    };
    let url_key = format!("{prefix}:url");
    let alt_key = format!("{prefix}:alt");

    let mut images: Vec<MetaImage> = Vec::new();
    for meta in document.select(&selector) {
        let element = meta.value();
        let (Some(key), Some(content)) = (element.attr(key_attr), element.attr("content").and_then(non_empty))
        else {
            continue;
        };

        if key == prefix || key == url_key {
            if let Some(src) = resolve(page_url, &content) {
                images.push(MetaImage::new(src));
            }
        } else if key == alt_key {
            if let Some(last) = images.last_mut() {
                last.alt = Some(content);
            }
        }
    }
    images
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!doctype html>
<html>
<head>
  <title> Docker 入門 | r4ai.dev </title>
  <meta name="description" content="Tech blog by Rai">
  <meta property="og:title" content="Docker 入門">
  <meta property="og:url" content="/posts/docker_tutorial/">
  <meta property="og:image" content="ogimage.png">
  <meta property="og:image:alt" content="Docker whale">
  <meta name="twitter:title" content="Docker on Twitter">
  <meta name="twitter:image" content="https://cdn.example/tw.png">
  <link rel="shortcut icon" href="/favicon.svg">
  <link rel="alternate" type="application/json+oembed" href="/oembed?url=x">
</head>
<body><p>hello</p></body>
</html>"#;

    fn page_url() -> Url {
        Url::parse("https://r4ai.dev/posts/docker_tutorial/").unwrap()
    }

    #[test]
    fn test_extracts_document_and_open_graph() {
        let page = extract(PAGE, &page_url());
        let metadata = &page.metadata;

        assert_eq!(metadata.title.as_deref(), Some("Docker 入門 | r4ai.dev"));
        assert_eq!(metadata.description.as_deref(), Some("Tech blog by Rai"));
        assert_eq!(metadata.favicon.as_deref(), Some("https://r4ai.dev/favicon.svg"));

        assert_eq!(metadata.open_graph.title.as_deref(), Some("Docker 入門"));
        assert_eq!(
            metadata.open_graph.url.as_deref(),
            Some("https://r4ai.dev/posts/docker_tutorial/")
        );
        assert_eq!(
            metadata.open_graph.images,
            vec![MetaImage {
                url: "https://r4ai.dev/posts/docker_tutorial/ogimage.png".into(),
                alt: Some("Docker whale".into()),
            }]
        );

        assert_eq!(metadata.twitter_card.title.as_deref(), Some("Docker on Twitter"));
        assert_eq!(metadata.twitter_card.images[0].url, "https://cdn.example/tw.png");
    }

    #[test]
    fn test_oembed_discovery() {
        let page = extract(PAGE, &page_url());
        assert_eq!(
            page.oembed_endpoint.as_ref().map(Url::as_str),
            Some("https://r4ai.dev/oembed?url=x")
        );
        assert!(page.metadata.oembed.is_none());
    }

    #[test]
    fn test_bare_document() {
        let metadata = extract_metadata("<p>no head</p>", &page_url());
        assert_eq!(metadata, Metadata::default());
    }
}
