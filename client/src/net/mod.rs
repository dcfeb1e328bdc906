//! Networking modules for the conversational endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the single `/chat` request/response cycle per turn;
//! `types` layers client-only DTOs over the shared `wire` schema.

pub mod api;
pub mod types;
