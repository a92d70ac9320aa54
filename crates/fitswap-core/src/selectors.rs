//! Values derived from `ViewState`. Nothing here is cached; every call
//! reads the current state.

use crate::catalog::{Product, ProductId};
use crate::state::ViewState;

/// Products currently selected, in catalog order.
pub fn selected_products(state: &ViewState) -> impl Iterator<Item = &Product> {
    state.products().iter().filter(|p| p.is_selected())
}

pub fn selected_count(state: &ViewState) -> usize {
    selected_products(state).count()
}

/// Sum of prices over selected products; 0 when nothing is selected.
pub fn total_price(state: &ViewState) -> u64 {
    selected_products(state).map(|p| p.price).sum()
}

pub fn can_swap(state: &ViewState) -> bool {
    state.customer_photo().is_some() && state.outfit_photo().is_some() && !state.is_processing()
}

pub fn can_checkout(state: &ViewState) -> bool {
    total_price(state) > 0
}

/// One selected product as shown in the cart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub spec: String,
    pub price: u64,
}

/// Snapshot of the cart for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub count: usize,
    pub total: u64,
}

pub fn cart_summary(state: &ViewState) -> CartSummary {
    let lines: Vec<CartLine> = selected_products(state)
        .map(|p| CartLine {
            id: p.id,
            name: p.name.clone(),
            spec: p.spec.clone(),
            price: p.price,
        })
        .collect();
    let total = lines.iter().map(|l| l.price).sum();
    CartSummary {
        count: lines.len(),
        total,
        lines,
    }
}
