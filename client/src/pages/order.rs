//! Single-page ordering kiosk screen.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::debug_panel::DebugPanel;
use crate::components::order_summary::OrderSummary;
use crate::state::ui::UiState;

/// The kiosk page: chat on the left, order summary (and optionally the
/// debug panel) on the right.
#[component]
pub fn OrderPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_debug = move |_| ui.update(|u| u.debug_open = !u.debug_open);

    view! {
        <div class="order-page">
            <header class="order-page__header">
                <h1 class="order-page__title">"CounterChat"</h1>
                <button class="order-page__debug-toggle" on:click=on_toggle_debug>
                    {move || if ui.get().debug_open { "Hide debug" } else { "Show debug" }}
                </button>
            </header>

            <main class="order-page__layout">
                <ChatPanel/>
                <aside class="order-page__sidebar">
                    <OrderSummary/>
                    <Show when=move || ui.get().debug_open>
                        <DebugPanel/>
                    </Show>
                </aside>
            </main>
        </div>
    }
}
