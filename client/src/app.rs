//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::order::OrderPage;
use crate::state::conversation::ConversationState;
use crate::state::debug::DebugState;
use crate::state::order::OrderState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Each mounted `App` constructs its own state instances and provides them
/// via context, so independent widget instances never share session or
/// order data.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let conversation = RwSignal::new(ConversationState::default());
    let order = RwSignal::new(OrderState::default());
    let debug = RwSignal::new(DebugState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(conversation);
    provide_context(order);
    provide_context(debug);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/counterchat.css"/>
        <Title text="CounterChat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=OrderPage/>
            </Routes>
        </Router>
    }
}
