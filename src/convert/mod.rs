//! Converters between external trees and this crate's types.
//!
//! | Direction | Module | Function | Feature |
//! |-----------|--------|----------|---------|
//! | HTML fragment → output nodes | [`html`] | [`parse_fragment()`] | always |
//! | Markdown → document tree | `markdown` | `from_markdown()` | `markdown` |
//!
//! The HTML direction is what oEmbed presets use to turn an embed's `html`
//! field into children. The markdown adapter produces a [`Root`](crate::node::Root)
//! ready for the embed engine.

pub mod html;

pub use self::html::parse_fragment;

#[cfg(feature = "markdown")]
pub mod markdown;

#[cfg(feature = "markdown")]
pub use self::markdown::{from_markdown, from_mdast};
