//! reqwest-backed fetchers.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use super::extract::{ExtractedPage, extract};
use super::{Metadata, MetadataFetcher, OEmbed, OEmbedFetcher};
use crate::error::{EmbedError, EmbedResult};

const TWITTER_OEMBED_ENDPOINT: &str = "https://publish.twitter.com/oembed";

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout, body included
    pub timeout: Duration,
    pub user_agent: String,
    /// Follow the page's oEmbed discovery link
    pub discover_oembed: bool,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(15),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            discover_oembed: true,
        }
    }
}

impl HttpFetcherConfig {
    /// Set the request timeout (builder pattern).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent (builder pattern).
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn build_client(config: &HttpFetcherConfig) -> EmbedResult<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()?)
}

async fn get_text(client: &reqwest::Client, url: &Url) -> EmbedResult<String> {
    tracing::debug!(url = %url, "fetching");
    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(EmbedError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}

// =============================================================================
// HttpFetcher
// =============================================================================

/// Fetches a page, extracts its metadata and follows oEmbed discovery.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    config: HttpFetcherConfig,
}

impl HttpFetcher {
    /// Create a fetcher with the default configuration.
    pub fn new() -> EmbedResult<Self> {
        Self::with_config(HttpFetcherConfig::default())
    }

    /// Create a fetcher with a custom configuration.
    pub fn with_config(config: HttpFetcherConfig) -> EmbedResult<Self> {
        Ok(Self {
            client: build_client(&config)?,
            config,
        })
    }

    pub fn config(&self) -> &HttpFetcherConfig {
        &self.config
    }

    /// Raw oEmbed document behind a discovery link.
    async fn discover(&self, endpoint: &Url) -> EmbedResult<serde_json::Value> {
        let body = get_text(&self.client, endpoint).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl MetadataFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> EmbedResult<Option<Metadata>> {
        let html = get_text(&self.client, url).await?;
        let ExtractedPage {
            mut metadata,
            oembed_endpoint,
        } = extract(&html, url);

        if self.config.discover_oembed {
            if let Some(endpoint) = oembed_endpoint {
                match self.discover(&endpoint).await {
                    Ok(document) => metadata.oembed = Some(document),
                    Err(error) => {
                        tracing::debug!(url = %url, endpoint = %endpoint, %error, "oembed discovery failed");
                    }
                }
            }
        }

        Ok(Some(metadata))
    }
}

// =============================================================================
// TwitterOEmbedFetcher
// =============================================================================

/// Queries the Twitter/X publish endpoint for status embeds.
#[derive(Debug, Clone)]
pub struct TwitterOEmbedFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl TwitterOEmbedFetcher {
    pub fn new() -> EmbedResult<Self> {
        Self::with_config(&HttpFetcherConfig::default())
    }

    pub fn with_config(config: &HttpFetcherConfig) -> EmbedResult<Self> {
        Ok(Self {
            client: build_client(config)?,
            endpoint: TWITTER_OEMBED_ENDPOINT.to_string(),
        })
    }

    /// Query `endpoint` instead of the public publish endpoint (builder pattern).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Request URL for a status permalink.
    pub fn request_url(&self, url: &Url) -> EmbedResult<Url> {
        Url::parse_with_params(&self.endpoint, &[("url", url.as_str())]).map_err(|source| EmbedError::InvalidUrl {
            url: self.endpoint.clone(),
            source,
        })
    }
}

#[async_trait]
impl OEmbedFetcher for TwitterOEmbedFetcher {
    async fn fetch_oembed(&self, url: &Url) -> EmbedResult<Option<OEmbed>> {
        let request = self.request_url(url)?;
        let body = get_text(&self.client, &request).await?;
        let oembed = serde_json::from_str::<OEmbed>(&body)
            .map_err(|e| EmbedError::malformed(url.as_str(), e.to_string()))?;
        Ok(Some(oembed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Link, Node, Paragraph, Root};
    use crate::transform::{Diagnostic, Transformer, resolve};
    use crate::transformers::{LinkCardTransformer, OEmbedTransformer};
    use mockito::{Matcher, Server, ServerGuard};
    use std::sync::Arc;

    const PAGE: &str = r#"<html><head>
  <title>Fallback</title>
  <meta property="og:title" content="A post">
  <link rel="alternate" type="application/json+oembed" href="/oembed?url=post">
</head><body></body></html>"#;

    const VIDEO: &str = r#"{"type":"video","version":"1.0","html":"<iframe></iframe>","width":480,"height":270}"#;

    fn page_url(server: &ServerGuard, path: &str) -> Url {
        Url::parse(&format!("{}{path}", server.url())).unwrap()
    }

    #[test]
    fn test_twitter_request_url() {
        let fetcher = TwitterOEmbedFetcher::new().unwrap();
        let status = Url::parse("https://twitter.com/jack/status/20").unwrap();
        assert_eq!(
            fetcher.request_url(&status).unwrap().as_str(),
            "https://publish.twitter.com/oembed?url=https%3A%2F%2Ftwitter.com%2Fjack%2Fstatus%2F20"
        );
    }

    #[test]
    fn test_default_config() {
        let config = HttpFetcherConfig::default().with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config.discover_oembed);
        assert!(config.user_agent.starts_with("tola-embed/"));
    }

    #[tokio::test]
    async fn test_fetch_follows_discovery_link() {
        let mut server = Server::new_async().await;
        let _page = server
            .mock("GET", "/post")
            .with_header("content-type", "text/html")
            .with_body(PAGE)
            .create_async()
            .await;
        let discovery = server
            .mock("GET", "/oembed")
            .match_query(Matcher::UrlEncoded("url".into(), "post".into()))
            .with_header("content-type", "application/json")
            .with_body(VIDEO)
            .expect(1)
            .create_async()
            .await;

        let url = page_url(&server, "/post");
        let metadata = HttpFetcher::new().unwrap().fetch(&url).await.unwrap().unwrap();

        discovery.assert_async().await;
        assert_eq!(metadata.open_graph.title.as_deref(), Some("A post"));
        assert_eq!(metadata.oembed(&url).unwrap().unwrap().type_name(), "video");
    }

    #[tokio::test]
    async fn test_fetch_without_discovery() {
        let mut server = Server::new_async().await;
        let _page = server.mock("GET", "/post").with_body(PAGE).create_async().await;
        let discovery = server.mock("GET", "/oembed").expect(0).create_async().await;

        let fetcher = HttpFetcher::with_config(HttpFetcherConfig {
            discover_oembed: false,
            ..HttpFetcherConfig::default()
        })
        .unwrap();
        let metadata = fetcher.fetch(&page_url(&server, "/post")).await.unwrap().unwrap();

        discovery.assert_async().await;
        assert_eq!(metadata.title.as_deref(), Some("Fallback"));
        assert!(metadata.oembed.is_none());
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let mut server = Server::new_async().await;
        let _page = server.mock("GET", "/gone").with_status(404).create_async().await;

        let error = HttpFetcher::new()
            .unwrap()
            .fetch(&page_url(&server, "/gone"))
            .await
            .unwrap_err();
        assert!(matches!(error, EmbedError::Status { status: 404, .. }));
        assert_eq!(error.kind(), "status");
    }

    #[tokio::test]
    async fn test_broken_discovery_keeps_page_metadata() {
        let mut server = Server::new_async().await;
        let _page = server.mock("GET", "/post").with_body(PAGE).create_async().await;
        let _discovery = server
            .mock("GET", "/oembed")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let url = page_url(&server, "/post");
        let metadata = HttpFetcher::new().unwrap().fetch(&url).await.unwrap().unwrap();

        assert_eq!(metadata.open_graph.title.as_deref(), Some("A post"));
        assert!(metadata.oembed.is_none());
    }

    #[tokio::test]
    async fn test_malformed_discovery_keeps_page_metadata() {
        let mut server = Server::new_async().await;
        let _page = server.mock("GET", "/post").with_body(PAGE).create_async().await;
        let _discovery = server
            .mock("GET", "/oembed")
            .match_query(Matcher::Any)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let url = page_url(&server, "/post");
        let metadata = HttpFetcher::new().unwrap().fetch(&url).await.unwrap().unwrap();
        assert!(metadata.oembed.is_none());
    }

    #[tokio::test]
    async fn test_broken_discovery_falls_back_to_link_card() {
        let mut server = Server::new_async().await;
        let _page = server.mock("GET", "/post").with_body(PAGE).create_async().await;
        let _discovery = server
            .mock("GET", "/oembed")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let url = page_url(&server, "/post");
        let fetcher: Arc<dyn MetadataFetcher> = Arc::new(HttpFetcher::new().unwrap());
        let transformers: [Arc<dyn Transformer>; 2] = [
            Arc::new(OEmbedTransformer::new(fetcher.clone())),
            Arc::new(LinkCardTransformer::html(fetcher)),
        ];
        let mut root = Root::new([Node::from(Paragraph::new([Link::autolink(url.as_str()).into()]))]);
        let mut sink: Vec<Diagnostic> = Vec::new();

        resolve(&mut root, &transformers, &mut sink).await;

        assert!(sink.is_empty(), "{sink:?}");
        let link = root.links().next().unwrap();
        assert!(link.is_embedded());
        assert_eq!(link.data.render.as_ref().unwrap().tag_name, "a");
    }

    #[tokio::test]
    async fn test_twitter_fetch_oembed() {
        let mut server = Server::new_async().await;
        let status = "https://twitter.com/jack/status/20";
        let endpoint = server
            .mock("GET", "/oembed")
            .match_query(Matcher::UrlEncoded("url".into(), status.into()))
            .with_header("content-type", "application/json")
            .with_body(r#"{"type":"rich","version":"1.0","html":"<blockquote>just setting up</blockquote>","width":550,"height":null}"#)
            .expect(1)
            .create_async()
            .await;

        let fetcher = TwitterOEmbedFetcher::new()
            .unwrap()
            .with_endpoint(format!("{}/oembed", server.url()));
        let oembed = fetcher.fetch_oembed(&Url::parse(status).unwrap()).await.unwrap().unwrap();

        endpoint.assert_async().await;
        assert_eq!(oembed.type_name(), "rich");
        assert_eq!(oembed.html(), Some("<blockquote>just setting up</blockquote>"));
    }

    #[tokio::test]
    async fn test_twitter_malformed_payload() {
        let mut server = Server::new_async().await;
        let _endpoint = server
            .mock("GET", "/oembed")
            .match_query(Matcher::Any)
            .with_body(r#"{"type":"hologram","version":"1.0"}"#)
            .create_async()
            .await;

        let fetcher = TwitterOEmbedFetcher::new()
            .unwrap()
            .with_endpoint(format!("{}/oembed", server.url()));
        let error = fetcher
            .fetch_oembed(&Url::parse("https://twitter.com/jack/status/20").unwrap())
            .await
            .unwrap_err();
        assert_eq!(error.kind(), "malformed");
    }
}
