//! Relay client for the upstream conversational backend.
//!
//! Thin HTTP wrapper around the external `/chat` service. Pure parsing in
//! `parse_response` for testability.

#[cfg(test)]
#[path = "upstream_test.rs"]
mod upstream_test;

use std::time::Duration;

use wire::{ChatRequest, ChatResponse};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Error relaying a chat turn upstream.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(String),
    /// The request could not be sent or the body could not be read
    /// (connect failure, timeout, broken transfer).
    #[error("upstream request failed: {0}")]
    Request(String),
    /// The upstream answered with a non-success status.
    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The upstream body failed the wire schema check.
    #[error("upstream response failed schema check: {0}")]
    Decode(#[from] wire::WireError),
}

/// HTTP client for the configured upstream conversational endpoint.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    chat_url: String,
}

impl UpstreamClient {
    /// Build a client with request and connect timeouts applied.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::HttpClientBuild`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(chat_url: String) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, chat_url })
    }

    /// Forward one chat turn and decode the reply.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Request`] for transport failures,
    /// [`UpstreamError::Status`] for non-2xx replies, and
    /// [`UpstreamError::Decode`] when the body fails the schema check.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, UpstreamError> {
        let response = self
            .http
            .post(&self.chat_url)
            .json(request)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(UpstreamError::Status { status, body: text });
        }

        parse_response(&text)
    }
}

fn parse_response(json: &str) -> Result<ChatResponse, UpstreamError> {
    Ok(wire::decode_chat_response(json)?)
}
