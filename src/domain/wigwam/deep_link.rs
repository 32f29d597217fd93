//! Deep-link resolution for incoming URIs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the wigwam path segment in deep links from either provider.
static DEEPLINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/wigwams/([0-9]+)").expect("valid deep-link pattern"));

/// Extracts the wigwam id from an incoming URI, if it carries one. Any URI
/// containing a `/wigwams/{numeric-id}` segment routes to that wigwam's
/// detail; everything else is ignored.
pub fn parse_deep_link(uri: &str) -> Option<i64> {
    let captures = DEEPLINK_PATTERN.captures(uri)?;
    captures.get(1)?.as_str().parse().ok()
}
