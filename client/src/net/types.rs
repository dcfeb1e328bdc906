//! Client-side DTOs layered over the shared wire schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;

pub use wire::{ChatRequest, ChatResponse, Entity};

/// Snapshot of one turn's structured payload for the debug panel:
/// `{intent, entities, total}`, mirrored verbatim from the response.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TurnDebug {
    pub intent: String,
    pub entities: Vec<Entity>,
    pub total: f64,
}

impl TurnDebug {
    #[must_use]
    pub fn from_response(response: &ChatResponse) -> Self {
        Self {
            intent: response.intent.clone(),
            entities: response.entities.clone(),
            total: response.total_price,
        }
    }
}
