//! HTTP dispatch — one GET per lookup, parsed into a [`ResultSet`].

use crate::uri::build_uri;
use crate::GeocoderError;
use pindrop_core::config::GeocoderConfig;
use pindrop_core::{ResultSet, Suggestion, Ticket};
use serde::Deserialize;

/// The slice of the geocoding reply the widget consumes. Unknown top-level
/// keys (attribution, query echo, …) are ignored; a body without a `features`
/// array is a parse error.
#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Suggestion>,
}

/// Issues lookups against a configured geocoding endpoint.
///
/// Each [`Dispatcher::dispatch`] call performs exactly one outbound request.
/// Calls are independent: nothing is deduplicated, cancelled, or retried, and
/// no state is shared beyond the connection pool inside [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: GeocoderConfig,
    client: reqwest::Client,
}

impl Dispatcher {
    pub fn new(config: GeocoderConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    /// Look up `query`, tagging the reply with `ticket`.
    ///
    /// The caller guarantees `query` is non-empty — the empty-input short
    /// circuit lives at the session boundary and never reaches here. Any
    /// non-200 status is a [`GeocoderError::Status`]; a body that does not
    /// deserialize as a feature collection is a [`GeocoderError::Parse`].
    pub async fn dispatch(&self, query: &str, ticket: Ticket) -> Result<ResultSet, GeocoderError> {
        let uri = build_uri(&self.config, query);
        tracing::debug!(%ticket, %uri, "dispatching lookup");

        let response = self
            .client
            .get(&uri)
            .send()
            .await
            .map_err(GeocoderError::Transport)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!(%ticket, %status, "lookup failed");
            return Err(GeocoderError::Status(status));
        }

        let body = response.text().await.map_err(GeocoderError::Transport)?;
        let collection: FeatureCollection =
            serde_json::from_str(&body).map_err(GeocoderError::Parse)?;

        tracing::debug!(%ticket, count = collection.features.len(), "lookup resolved");
        Ok(ResultSet::new(collection.features, ticket))
    }
}
