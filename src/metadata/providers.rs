//! Provider URL predicates for the oEmbed override table.

use url::Url;

const TWITTER_HOSTS: &[&str] = &[
    "twitter.com",
    "www.twitter.com",
    "mobile.twitter.com",
    "x.com",
    "www.x.com",
];

/// Status (tweet) permalink: `https://twitter.com/{user}/status/{id}`, also on `x.com`.
pub fn is_twitter_status_url(url: &Url) -> bool {
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    let Some(host) = url.host_str() else {
        return false;
    };
    if !TWITTER_HOSTS.contains(&host.to_ascii_lowercase().as_str()) {
        return false;
    }

    let Some(segments) = url.path_segments() else {
        return false;
    };
    let segments: Vec<&str> = segments.filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [_user, "status" | "statuses", id, ..] => !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()),
        _ => false,
    }
}
