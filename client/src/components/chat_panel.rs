//! Chat transcript and input row for the ordering conversation.
//!
//! SYSTEM CONTEXT
//! ==============
//! This component is the submission controller: it gates input on the
//! sending flag, issues the `/chat` request, and dispatches the response
//! to the conversation, order, and debug state. Controls re-enable and
//! focus returns to the input whatever the outcome of a turn.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Parser, html};

use crate::state::conversation::{ConversationState, Sender};
use crate::state::debug::DebugState;
use crate::state::order::OrderState;

/// Chat panel showing the transcript and an input for the next turn.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();
    let order = expect_context::<RwSignal<OrderState>>();
    let debug = expect_context::<RwSignal<DebugState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Keep the newest message visible.
    Effect::new(move || {
        let _ = conversation.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    // Focus the input once it mounts.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input_el) = input_ref.get() {
                let _ = input_el.focus();
            }
        }
    });

    let do_send = move || {
        if conversation.get().sending {
            return;
        }

        let raw = input.get();
        let mut submitted = None;
        conversation.update(|c| submitted = c.begin_turn(&raw));
        let Some(message) = submitted else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let request = wire::ChatRequest {
                message,
                session_id: conversation.get().session_id,
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::send_chat(&request).await {
                    Ok(response) => {
                        order.update(|o| o.apply_turn(&response.entities, response.total_price));
                        debug.update(|d| {
                            d.last = Some(crate::net::types::TurnDebug::from_response(&response));
                        });
                        conversation.update(|c| c.complete_turn(&response));
                    }
                    Err(error) => {
                        log::warn!("chat turn failed: {error}");
                        conversation.update(|c| c.fail_turn());
                    }
                }

                // Focus returns to the input whatever the outcome.
                if let Some(input_el) = input_ref.get() {
                    let _ = input_el.focus();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = message;
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !conversation.get().sending;

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = conversation.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let is_bot = msg.sender == Sender::Bot;
                            let label = if is_bot { "Assistant" } else { "You" };
                            let text = msg.text.clone();

                            view! {
                                <div class="chat-panel__message" class:chat-panel__message--bot=is_bot>
                                    <span class="chat-panel__author">{label}</span>
                                    {if is_bot {
                                        let rendered = render_bot_markdown(&text);
                                        view! {
                                            <span class="chat-panel__text chat-panel__markdown" inner_html=rendered></span>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span class="chat-panel__text">{text}</span> }.into_any()
                                    }}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                {move || {
                    conversation
                        .get()
                        .sending
                        .then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="I'd like a large latte..."
                    node_ref=input_ref
                    disabled=move || conversation.get().sending
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Render a bot reply as markdown with raw HTML dropped before embedding.
fn render_bot_markdown(markdown: &str) -> String {
    let parser = Parser::new(markdown).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
