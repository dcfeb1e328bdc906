#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Cross-component UI flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    /// Whether the developer debug panel is shown.
    pub debug_open: bool,
}
