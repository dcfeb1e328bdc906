//! Order summary panel: accumulated line items and the backend total.
//!
//! Re-render is full replacement from the accumulated list each turn, so
//! rendering the same state twice produces the same view.

#[cfg(test)]
#[path = "order_summary_test.rs"]
mod order_summary_test;

use leptos::prelude::*;

use crate::state::order::OrderState;
use crate::util::format::format_price;

fn item_details(size: Option<&str>) -> String {
    size.map_or_else(|| "Regular".to_owned(), |size| format!("Size: {size}"))
}

/// Sidebar panel listing every accumulated order line and the total.
#[component]
pub fn OrderSummary() -> impl IntoView {
    let order = expect_context::<RwSignal<OrderState>>();

    view! {
        <div class="order-summary">
            <h2 class="order-summary__title">"Your Order"</h2>

            <div class="order-summary__items">
                {move || {
                    let items = order.get().items;
                    if items.is_empty() {
                        return view! {
                            <p class="order-summary__empty">"No items yet"</p>
                        }
                            .into_any();
                    }

                    items
                        .iter()
                        .map(|item| {
                            let name = item.name.clone();
                            let details = item_details(item.size.as_deref());

                            view! {
                                <div class="order-summary__item">
                                    <div class="order-summary__item-name">{name}</div>
                                    <div class="order-summary__item-details">{details}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="order-summary__total">
                "Total: $"
                <span class="order-summary__total-value">
                    {move || format_price(order.get().total_price)}
                </span>
            </div>
        </div>
    }
}
