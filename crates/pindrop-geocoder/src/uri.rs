//! Deterministic request URI construction.
//!
//! ```text
//! {endpoint}/geocoding/v5/{source}/{query}.json?access_token={token}
//!     [&proximity={proximity}] [&bbox={bbox}] [&types={types}]
//! ```
//!
//! The query and `types` values are percent-encoded; `proximity` and `bbox`
//! are passed through verbatim (they are comma-separated coordinate lists the
//! API expects raw). Optional parameters appear only when configured, always
//! in proximity → bbox → types order.

use pindrop_core::config::GeocoderConfig;

/// Build the lookup URI for a non-empty query string.
pub fn build_uri(config: &GeocoderConfig, query: &str) -> String {
    let mut uri = format!(
        "{}/geocoding/v5/{}/{}.json?access_token={}",
        config.endpoint,
        config.source,
        urlencoding::encode(query),
        config.access_token,
    );
    if !config.proximity.is_empty() {
        uri.push_str("&proximity=");
        uri.push_str(&config.proximity);
    }
    if !config.bbox.is_empty() {
        uri.push_str("&bbox=");
        uri.push_str(&config.bbox);
    }
    if !config.types.is_empty() {
        uri.push_str("&types=");
        uri.push_str(&urlencoding::encode(&config.types));
    }
    uri
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
