//! Shared wire model for the `/chat` exchange.
//!
//! This crate owns the JSON representation used by both the server relay
//! and the browser client. Decoding goes through [`decode_chat_response`]
//! so a malformed backend body surfaces as a typed error instead of
//! undefined values flowing into rendering.

use serde::{Deserialize, Serialize};

/// Error returned by [`decode_chat_response`].
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The body is not valid JSON or does not match the response schema.
    #[error("failed to decode chat response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Entity types the client treats as order line items.
const ITEM_TYPES: [&str; 2] = ["beverage", "food"];

/// Entity type carrying a size attribute.
const SIZE_TYPE: &str = "size";

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Raw user text for this turn.
    pub message: String,
    /// Session to continue, or `None` (JSON `null`) on the first turn.
    pub session_id: Option<String>,
}

/// A structured fact the backend extracted from user text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Backend-defined tag, e.g. `"beverage"`, `"food"`, `"size"`,
    /// `"quantity"`. Unrecognized tags are ignored by the client.
    #[serde(rename = "type")]
    pub kind: String,
    /// Extracted text. Defaults to empty when the backend omits it so a
    /// malformed entity degrades to empty rendered text.
    #[serde(default)]
    pub value: String,
}

impl Entity {
    /// Whether this entity contributes an order line item (`beverage` or
    /// `food`).
    #[must_use]
    pub fn is_order_item(&self) -> bool {
        ITEM_TYPES.contains(&self.kind.as_str())
    }

    /// Whether this entity is a size attribute.
    #[must_use]
    pub fn is_size(&self) -> bool {
        self.kind == SIZE_TYPE
    }
}

/// Successful body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Session assigned by the backend. Always present; the client adopts
    /// it unconditionally.
    pub session_id: String,
    /// Conversational reply to render as the bot message.
    pub response: String,
    /// Detected intent, e.g. `"order"`, `"greeting"`.
    pub intent: String,
    /// Entities extracted from the user text this turn.
    #[serde(default)]
    pub entities: Vec<Entity>,
    /// Backend's current total for the whole order. Authoritative;
    /// overwrites whatever the client displayed before.
    #[serde(default)]
    pub total_price: f64,
}

/// Decode a `/chat` response body against the schema.
///
/// # Errors
///
/// Returns [`WireError::Decode`] when the body is not valid JSON or is
/// missing a required field (`session_id`, `response`, `intent`).
pub fn decode_chat_response(body: &str) -> Result<ChatResponse, WireError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
