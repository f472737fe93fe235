//! pindrop-core — suggestion types, search controller, and configuration.
//!
//! This crate owns the interactive core of pindrop: the ticket-guarded
//! result/focus state machine and the session wrapper that fires selection
//! callbacks. It performs no I/O — the geocoder crate issues requests and the
//! TUI crate renders — so everything here is synchronously testable.
//!
//! # Architecture
//!
//! ```text
//! keystrokes ──► SearchSession ──► SearchController
//!                     │                  │
//!                     │    ticket        │ accepted ResultSet
//!                     ▼                  ▼
//!               Dispatcher (HTTP)   suggestion list + focus
//! ```
//!
//! A [`SearchController`] issues a fresh [`Ticket`] per non-empty input edit
//! and accepts a response only when its ticket is at least the last accepted
//! one, so a slow reply to a superseded query can never overwrite newer
//! results.

pub mod config;
pub mod controller;
pub mod session;
pub mod suggestion;

pub use controller::SearchController;
pub use session::SearchSession;
pub use suggestion::{ResultSet, Suggestion, Ticket};
