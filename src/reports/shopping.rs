use std::collections::HashMap;

use crate::catalog::FoodCatalog;
use crate::models::{SelectedMealItem, ShoppingListEntry};
use crate::reports::round_to;

/// Aggregate everything the pantry does not cover into a shopping list.
///
/// Lines are grouped by display name and sorted by category name; lines in
/// the same category keep first-appearance order. Foods missing from the
/// catalog are left out.
pub fn build_shopping_list(
    catalog: &FoodCatalog,
    items: &[SelectedMealItem],
) -> Vec<ShoppingListEntry> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut lines: Vec<ShoppingListEntry> = Vec::new();

    for item in items.iter().filter(|i| !i.uses_inventory) {
        let Some(food) = catalog.get(&item.food_name) else {
            continue;
        };

        let i = *position.entry(item.food_name.as_str()).or_insert_with(|| {
            lines.push(ShoppingListEntry {
                item: item.food_name.clone(),
                quantity: 0.0,
                unit: String::new(),
                estimated_cost: 0.0,
                category: food.category.as_str().to_string(),
            });
            lines.len() - 1
        });

        let line = &mut lines[i];
        line.quantity += item.quantity;
        line.estimated_cost += item.estimated_cost;
        line.unit = item.unit.clone();
    }

    for line in &mut lines {
        line.quantity = round_to(line.quantity, 1);
        line.estimated_cost = round_to(line.estimated_cost, 2);
    }

    lines.sort_by(|a, b| a.category.cmp(&b.category));
    lines
}
