//! Accumulated order state derived from per-turn entities.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use wire::Entity;

/// One accumulated order line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderItem {
    pub name: String,
    /// Size paired with this item, when the turn carried one.
    pub size: Option<String>,
}

/// Append-only order summary accumulated across the conversation.
#[derive(Clone, Debug, Default)]
pub struct OrderState {
    /// Line items in arrival order. Only ever appended; a later turn never
    /// removes or corrects earlier lines.
    pub items: Vec<OrderItem>,
    /// Backend's current total for the whole order. Overwritten verbatim
    /// each turn, never accumulated locally.
    pub total_price: f64,
}

impl OrderState {
    /// Fold one turn's entities into the order.
    ///
    /// Beverage/food entities become new items; size entities pair with
    /// them by position in the two filtered subsequences, not by adjacency
    /// in the original entity list. A turn with more sizes than items drops
    /// the surplus sizes; all other entity types are ignored.
    pub fn apply_turn(&mut self, entities: &[Entity], total_price: f64) {
        let sizes: Vec<&Entity> = entities.iter().filter(|e| e.is_size()).collect();

        for (index, item) in entities.iter().filter(|e| e.is_order_item()).enumerate() {
            self.items.push(OrderItem {
                name: item.value.clone(),
                size: sizes.get(index).map(|size| size.value.clone()),
            });
        }

        self.total_price = total_price;
    }
}
