use crate::models::{InventoryUsage, SelectedMealItem};
use crate::reports::round_to;

/// How much of the plan the pantry covered.
pub fn summarize_inventory_usage(items: &[SelectedMealItem]) -> InventoryUsage {
    let total_meals = items.len();
    let from_inventory: Vec<&SelectedMealItem> =
        items.iter().filter(|i| i.uses_inventory).collect();
    let meals_from_inventory = from_inventory.len();

    let inventory_usage_percentage = if total_meals > 0 {
        round_to(meals_from_inventory as f64 / total_meals as f64 * 100.0, 1)
    } else {
        0.0
    };
    let cost_saved: f64 = from_inventory.iter().map(|i| i.estimated_cost).sum();

    InventoryUsage {
        total_meals,
        meals_from_inventory,
        inventory_usage_percentage,
        estimated_cost_saved: round_to(cost_saved, 2),
        waste_reduction: format!(
            "{} items used from inventory to reduce waste",
            meals_from_inventory
        ),
    }
}
