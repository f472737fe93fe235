//! pindrop-geocoder — the query dispatcher.
//!
//! Turns a query string plus a [`pindrop_core::Ticket`] into exactly one
//! outbound HTTP GET against a Mapbox-style geocoding endpoint and parses the
//! reply into a [`pindrop_core::ResultSet`]. No caching, cancellation, or
//! retries — overlapping lookups run to completion and the controller's
//! ticket guard sorts out which reply wins.

pub mod dispatcher;
pub mod uri;

pub use dispatcher::Dispatcher;
pub use uri::build_uri;

/// Message shown to users for any failed lookup, transport or parse alike.
pub const USER_MESSAGE: &str = "Unable to call Geocoder API. Please try again";

/// A failed lookup.
///
/// Callers get one opaque error with a user-facing message; the variants
/// exist for logging and tests, not for differentiated handling. There is no
/// retry policy.
#[derive(Debug, thiserror::Error)]
pub enum GeocoderError {
    /// The request never produced an HTTP response.
    #[error("Unable to call Geocoder API. Please try again")]
    Transport(#[source] reqwest::Error),
    /// The API answered with a non-200 status.
    #[error("Unable to call Geocoder API. Please try again")]
    Status(reqwest::StatusCode),
    /// The body was not a feature collection.
    #[error("Unable to call Geocoder API. Please try again")]
    Parse(#[source] serde_json::Error),
}
