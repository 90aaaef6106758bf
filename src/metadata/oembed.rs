//! Typed oEmbed payloads.
//!
//! See <https://oembed.com/#section2.3>. The `type` field selects the
//! variant; providers disagree on whether dimensions are numbers or strings,
//! so every numeric field accepts both.

use serde::Deserialize;

/// Fields shared by every oEmbed type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OEmbedBase {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub version: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_url: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub provider_url: Option<String>,
    /// Suggested cache lifetime in seconds
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub cache_age: Option<u64>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_dimension")]
    pub thumbnail_width: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_dimension")]
    pub thumbnail_height: Option<u32>,
}

/// Static photo.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OEmbedPhoto {
    #[serde(flatten)]
    pub base: OEmbedBase,
    /// Image source URL
    pub url: String,
    #[serde(deserialize_with = "lenient::dimension")]
    pub width: u32,
    #[serde(deserialize_with = "lenient::dimension")]
    pub height: u32,
}

/// Playable video; `html` is the embed markup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OEmbedVideo {
    #[serde(flatten)]
    pub base: OEmbedBase,
    pub html: String,
    #[serde(deserialize_with = "lenient::dimension")]
    pub width: u32,
    #[serde(deserialize_with = "lenient::dimension")]
    pub height: u32,
}

/// Generic embed with no type-specific fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OEmbedLink {
    #[serde(flatten)]
    pub base: OEmbedBase,
}

/// Rich HTML embed; dimensions may be null.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OEmbedRich {
    #[serde(flatten)]
    pub base: OEmbedBase,
    pub html: String,
    #[serde(default, deserialize_with = "lenient::opt_dimension")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_dimension")]
    pub height: Option<u32>,
}

/// oEmbed document, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OEmbed {
    Photo(OEmbedPhoto),
    Video(OEmbedVideo),
    Link(OEmbedLink),
    Rich(OEmbedRich),
}

impl OEmbed {
    /// Decode an oEmbed JSON value.
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// The lowercase type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Photo(_) => "photo",
            Self::Video(_) => "video",
            Self::Link(_) => "link",
            Self::Rich(_) => "rich",
        }
    }

    /// Shared fields.
    pub fn base(&self) -> &OEmbedBase {
        match self {
            Self::Photo(p) => &p.base,
            Self::Video(v) => &v.base,
            Self::Link(l) => &l.base,
            Self::Rich(r) => &r.base,
        }
    }

    /// Embed markup, for video and rich payloads.
    pub fn html(&self) -> Option<&str> {
        match self {
            Self::Video(v) => Some(&v.html),
            Self::Rich(r) => Some(&r.html),
            _ => None,
        }
    }
}

/// Deserializers that accept a number or a numeric string.
mod lenient {
    use serde::de::{Deserializer, Error};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    impl NumberOrString {
        fn to_f64<E: Error>(&self) -> Result<f64, E> {
            match self {
                Self::Number(n) => Ok(*n),
                Self::String(s) => s
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| E::custom(format!("expected a number, found `{s}`"))),
            }
        }

        fn to_unsigned<E: Error>(&self, max: f64) -> Result<u64, E> {
            let n = self.to_f64::<E>()?;
            if !n.is_finite() || n < 0.0 || n > max {
                return Err(E::custom(format!("number out of range: {n}")));
            }
            Ok(n.round() as u64)
        }
    }

    pub fn dimension<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let n = NumberOrString::deserialize(deserializer)?.to_unsigned(f64::from(u32::MAX))?;
        Ok(n as u32)
    }

    pub fn opt_dimension<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
        Option::<NumberOrString>::deserialize(deserializer)?
            .map(|v| v.to_unsigned(f64::from(u32::MAX)).map(|n| n as u32))
            .transpose()
    }

    pub fn opt_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        Option::<NumberOrString>::deserialize(deserializer)?
            .map(|v| v.to_unsigned(u64::MAX as f64))
            .transpose()
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(Option::<NumberOrString>::deserialize(deserializer)?.map(|v| match v {
            NumberOrString::Number(n) => format!("{n:?}"),
            NumberOrString::String(s) => s,
        }))
    }
}
