//! Error types for tola-embed.
//!
//! Every fallible transformer capability returns [`EmbedError`]. The
//! resolution engine never propagates these to the caller; it turns them into
//! diagnostics (see [`crate::transform::Diagnostic`]).

use thiserror::Error;

/// Errors that can occur while fetching metadata or rendering an embed.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// A URL could not be parsed
    #[error("invalid url `{url}`: {source}")]
    InvalidUrl {
        /// The rejected input
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// The metadata fetcher failed for a URL
    #[error("failed to fetch {url}: {message}")]
    Fetch {
        /// Target URL
        url: String,
        /// Failure description
        message: String,
    },

    /// Transport-level HTTP failure
    #[cfg(feature = "http")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote answered with a non-success status
    #[error("{url} answered with status {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Metadata payload did not have the expected shape
    #[error("malformed metadata for {url}: {message}")]
    Malformed {
        /// URL the payload belongs to
        url: String,
        /// What was wrong with it
        message: String,
    },

    /// JSON decoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A render capability ran without metadata cached by `matches`
    #[error("no metadata found for {0}")]
    MissingMetadata(String),

    /// Markdown parsing failed
    #[error("markdown error: {0}")]
    Markdown(String),

    /// A transformer panicked while resolving a link
    #[error("transformer panicked: {0}")]
    Panicked(String),

    /// Embed configuration could not be parsed or built
    #[error("config error: {0}")]
    Config(String),

    /// Error raised by user-supplied transformer code
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for embed operations.
pub type EmbedResult<T> = Result<T, EmbedError>;

impl EmbedError {
    /// Create a custom error with a message.
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create a fetch error for `url`.
    pub fn fetch(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            message: msg.into(),
        }
    }

    /// Create a malformed-metadata error for `url`.
    pub fn malformed(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Malformed {
            url: url.into(),
            message: msg.into(),
        }
    }

    /// Short machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "invalid-url",
            Self::Fetch { .. } => "fetch",
            #[cfg(feature = "http")]
            Self::Http(_) => "http",
            Self::Status { .. } => "status",
            Self::Malformed { .. } => "malformed",
            Self::Json(_) => "json",
            Self::MissingMetadata(_) => "missing-metadata",
            Self::Markdown(_) => "markdown",
            Self::Panicked(_) => "panicked",
            Self::Config(_) => "config",
            Self::Custom(_) => "custom",
        }
    }

    /// Serialize the error for diagnostics as `{"kind": .., "message": ..}`.
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        })
        .to_string()
    }
}
