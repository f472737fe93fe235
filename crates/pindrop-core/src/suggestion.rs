//! Core types shared across the pindrop crates: the [`Suggestion`] record,
//! the [`ResultSet`] a lookup resolves to, and the [`Ticket`] used to order
//! overlapping lookups.

use serde::{Deserialize, Serialize};

/// One candidate location returned by the geocoding API.
///
/// Only `id` and `place_name` are interpreted: `id` is the stable row key for
/// the rendering contract and `place_name` the display label. Every other
/// field of the feature record is retained verbatim in `extra`, so selection
/// callbacks receive the whole record as the API returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub place_name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, place_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            place_name: place_name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Monotonic sequence number identifying one dispatched lookup.
///
/// Tickets are issued per controller instance, strictly increasing. The
/// controller accepts a response only when its ticket is `>=` the ticket of
/// the last accepted response, so ties break toward the newer request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The ordered suggestions one lookup resolved to, tagged with the ticket of
/// the query that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub suggestions: Vec<Suggestion>,
    pub ticket: Ticket,
}

impl ResultSet {
    pub fn new(suggestions: Vec<Suggestion>, ticket: Ticket) -> Self {
        Self { suggestions, ticket }
    }
}
