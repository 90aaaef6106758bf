//! Transformer resolution over a document tree.
//!
//! # Flow
//!
//! ```text
//! Root ──collect──▶ [&mut Link, ...]      (bare links, document order)
//!                        │
//!                        ▼ one future per link, join_all
//!       for transformer in order:
//!           matches? ──err──▶ diagnostic, next
//!              │ false ─────▶ next
//!              ▼ true
//!           try_join3(tag_name, properties, children)
//!              │ err ───────▶ diagnostic, next
//!              ▼ ok
//!           commit override, stop
//! ```
//!
//! Diagnostics are buffered per link and handed to the sink in document
//! order once every link has settled.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::{join_all, try_join3};
use url::Url;

use crate::error::{EmbedError, EmbedResult};
use crate::node::{Link, Root};

use super::{Diagnostic, DiagnosticSink, Transformer};

/// Resolve every bare link in `root` against `transformers`, in place.
///
/// Completes once each eligible link has been claimed or has exhausted the
/// list. Failures never abort the pass; they are reported to `sink`.
pub async fn resolve<S>(root: &mut Root, transformers: &[Arc<dyn Transformer>], sink: &mut S)
where
    S: DiagnosticSink + ?Sized,
{
    if transformers.is_empty() {
        return;
    }

    let file_path = sink.file_path().map(str::to_owned);
    let links = root.bare_links_mut();
    tracing::debug!(links = links.len(), transformers = transformers.len(), "resolving bare links");

    let tasks = links
        .into_iter()
        .map(|link| resolve_link(link, transformers, file_path.as_deref()));
    let reports = join_all(tasks).await;

    for diagnostic in reports.into_iter().flatten() {
        tracing::warn!(
            transformer = %diagnostic.transformer,
            url = %diagnostic.url,
            "{}",
            diagnostic.message
        );
        sink.report(diagnostic);
    }
}

async fn resolve_link(link: &mut Link, transformers: &[Arc<dyn Transformer>], file_path: Option<&str>) -> Vec<Diagnostic> {
    let url = match Url::parse(&link.url) {
        Ok(url) => url,
        Err(error) => {
            tracing::debug!(url = %link.url, %error, "skipping link without an absolute url");
            return Vec::new();
        }
    };

    let mut diagnostics = Vec::new();
    for transformer in transformers {
        let fail = |error: EmbedError| {
            Diagnostic::embed_failure(transformer.name(), &link.url, file_path, link.position, &error)
        };

        match guarded(transformer.matches(&url)).await {
            Ok(true) => {}
            Ok(false) => continue,
            Err(error) => {
                diagnostics.push(fail(error));
                continue;
            }
        }

        let rendered = try_join3(
            guarded(transformer.tag_name(&url)),
            guarded(transformer.properties(&url)),
            guarded(transformer.children(&url)),
        )
        .await;

        match rendered {
            Ok((tag_name, properties, children)) => {
                tracing::debug!(transformer = transformer.name(), url = %url, tag = %tag_name, "link embedded");
                link.data.commit(tag_name, properties, children);
                break;
            }
            Err(error) => diagnostics.push(fail(error)),
        }
    }
    diagnostics
}

/// Await a capability, turning a panic into [`EmbedError::Panicked`].
async fn guarded<T>(future: impl Future<Output = EmbedResult<T>>) -> EmbedResult<T> {
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(EmbedError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
