//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the widget surfaces while reading/writing shared
//! state from Leptos context providers.

pub mod chat_panel;
pub mod debug_panel;
pub mod order_summary;
