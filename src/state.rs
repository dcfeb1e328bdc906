//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the relay client for the upstream conversational backend;
//! everything session-shaped lives in the browser, so there is nothing
//! else to share.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::upstream::UpstreamClient;

/// Application state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Relay client for the external conversational backend.
    pub upstream: UpstreamClient,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }
}
