#[cfg(test)]
#[path = "debug_test.rs"]
mod debug_test;

use crate::net::types::TurnDebug;

/// Most recent turn's structured payload, mirrored for the debug panel.
/// Failed turns never write here.
#[derive(Clone, Debug, Default)]
pub struct DebugState {
    pub last: Option<TurnDebug>,
}
