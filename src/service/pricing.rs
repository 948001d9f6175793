//! Order pricing.
//!
//! Pricing is deterministic and side-effect free: an item's price is the
//! dish's base price plus the surcharges of the customer's selected options,
//! resolved by exact name match against the dish's option catalog. It runs
//! exactly once, at order creation; the result is persisted on the order and
//! never recomputed, so later menu edits leave historical orders untouched.

use entity::dish::DishOption;
use entity::order_item::OrderItemOption;

use crate::model::order::SelectedOption;

/// Resolves the surcharge of one selection against the dish's option catalog.
///
/// A flat `extra` on the matched option wins over its choices. Unresolved
/// names — an option name missing from the catalog, a missing or unknown
/// choice — contribute nothing; they are not an error.
///
/// # Arguments
/// - `catalog` - The dish's option catalog
/// - `selection` - The customer's selected option name and optional choice
///
/// # Returns
/// - `Some(extra)` - Resolved surcharge
/// - `None` - Selection contributes nothing to the price
pub fn resolve_extra(catalog: &[DishOption], selection: &SelectedOption) -> Option<i64> {
    let option = catalog.iter().find(|option| option.name == selection.name)?;

    if let Some(extra) = option.extra {
        return Some(extra);
    }

    let choices = option.choices.as_deref()?;
    let chosen = selection.choice.as_deref()?;
    choices.iter().find(|choice| choice.name == chosen)?.extra
}

/// Computes the price of one order item.
///
/// # Arguments
/// - `base_price` - The dish's base price
/// - `catalog` - The dish's option catalog
/// - `selections` - The customer's selected options
///
/// # Returns
/// - Base price plus all resolved surcharges
pub fn item_price(base_price: i64, catalog: &[DishOption], selections: &[SelectedOption]) -> i64 {
    base_price
        + selections
            .iter()
            .filter_map(|selection| resolve_extra(catalog, selection))
            .sum::<i64>()
}

/// Sums per-item prices into the order total.
pub fn order_total(item_prices: &[i64]) -> i64 {
    item_prices.iter().sum()
}

/// Freezes one selection into the snapshot stored on the order item.
///
/// The resolved surcharge is stamped into the snapshot so the stored options
/// stay meaningful after the dish's catalog changes.
///
/// # Arguments
/// - `catalog` - The dish's option catalog at order time
/// - `selection` - The customer's selected option
pub fn snapshot_selection(catalog: &[DishOption], selection: &SelectedOption) -> OrderItemOption {
    OrderItemOption {
        name: selection.name.clone(),
        choice: selection.choice.clone(),
        extra: resolve_extra(catalog, selection),
    }
}
