//! Developer panel mirroring the raw structured payload of the last turn.
//!
//! Purely observational: the snapshot is pretty-printed verbatim with no
//! transformation or validation.

#[cfg(test)]
#[path = "debug_panel_test.rs"]
mod debug_panel_test;

use leptos::prelude::*;

use crate::net::types::TurnDebug;
use crate::state::debug::DebugState;

fn pretty_payload(snapshot: &TurnDebug) -> String {
    serde_json::to_string_pretty(snapshot).unwrap_or_else(|_| "{}".to_owned())
}

/// Collapsible debug view of `{intent, entities, total}` for the last turn.
#[component]
pub fn DebugPanel() -> impl IntoView {
    let debug = expect_context::<RwSignal<DebugState>>();

    view! {
        <div class="debug-panel">
            <div class="debug-panel__label">"DEBUG"</div>
            <Show
                when=move || debug.get().last.is_some()
                fallback=|| view! { <p class="debug-panel__empty">"No turns yet"</p> }
            >
                <pre class="debug-panel__json">
                    {move || debug.get().last.as_ref().map(pretty_payload).unwrap_or_default()}
                </pre>
            </Show>
        </div>
    }
}
