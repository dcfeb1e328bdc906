//! REST API helper for the conversational endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub returning an error, since submissions only
//! happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failure, timeout, non-success status, and decode failure all
//! collapse into a single error string. The caller renders one fixed
//! apology regardless of which of them happened, so the distinction only
//! matters for the console log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::{ChatRequest, ChatResponse};

/// Path of the conversational endpoint on the page origin.
pub const CHAT_ENDPOINT: &str = "/chat";

/// Milliseconds before an in-flight request is abandoned. The original
/// widget waited forever and could wedge the controls on a hung backend.
#[cfg(any(test, feature = "hydrate"))]
const REQUEST_TIMEOUT_MS: u32 = 30_000;

#[cfg(any(test, feature = "hydrate"))]
fn chat_failed_message(status: u16) -> String {
    format!("chat request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_timeout_message() -> String {
    format!("chat request timed out after {REQUEST_TIMEOUT_MS}ms")
}

/// POST one turn to the conversational endpoint and decode the reply.
///
/// # Errors
///
/// Returns an error string when the request cannot be issued, times out,
/// returns a non-success status, or the body fails the schema check.
pub async fn send_chat(request: &ChatRequest) -> Result<ChatResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let send = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send();
        let timeout = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);

        let resp = match select(Box::pin(send), Box::pin(timeout)).await {
            Either::Left((result, _)) => result.map_err(|e| e.to_string())?,
            Either::Right(_) => return Err(chat_timeout_message()),
        };

        if !resp.ok() {
            return Err(chat_failed_message(resp.status()));
        }

        let body = resp.text().await.map_err(|e| e.to_string())?;
        wire::decode_chat_response(&body).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
