//! Built-in transformers.
//!
//! - [`OEmbedTransformer`] (`"oembed"`): embeds the page's oEmbed document
//! - [`LinkCardTransformer`] (`"link-card"`): renders a preview card from
//!   Open Graph / Twitter Card metadata
//!
//! Both fetch in `matches` and keep the result in a cache owned by the
//! transformer, so render calls and later documents never fetch again.

mod link_card;
mod oembed;

pub use link_card::LinkCardTransformer;
pub use oembed::OEmbedTransformer;
