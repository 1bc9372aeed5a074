use crate::catalog::FoodCatalog;
use crate::models::{AlternativeGroup, AlternativeSuggestion, ShoppingListEntry};
use crate::planner::constants::{
    ALTERNATIVE_COST_RATIO, MAX_ALTERNATIVES_PER_ITEM, MAX_EXPENSIVE_ITEMS,
};
use crate::reports::round_to;

/// Cheaper same-category options for the most expensive shopping lines.
///
/// Savings multiply the per-100 price difference by the purchased quantity.
pub fn suggest_alternatives(
    catalog: &FoodCatalog,
    shopping_list: &[ShoppingListEntry],
) -> Vec<AlternativeGroup> {
    let mut expensive: Vec<&ShoppingListEntry> = shopping_list.iter().collect();
    expensive.sort_by(|a, b| {
        b.estimated_cost
            .partial_cmp(&a.estimated_cost)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    expensive
        .into_iter()
        .take(MAX_EXPENSIVE_ITEMS)
        .filter_map(|entry| {
            let original = catalog.get(&entry.item)?;
            let alternatives: Vec<AlternativeSuggestion> = catalog
                .find_alternatives(&original.name, ALTERNATIVE_COST_RATIO)
                .into_iter()
                .take(MAX_ALTERNATIVES_PER_ITEM)
                .filter_map(|name| catalog.get(name))
                .map(|alt| AlternativeSuggestion {
                    name: alt.display_name(),
                    cost_per_100: alt.cost_per_100,
                    estimated_savings: round_to(
                        (original.cost_per_100 - alt.cost_per_100) * entry.quantity,
                        2,
                    ),
                })
                .collect();

            if alternatives.is_empty() {
                return None;
            }
            Some(AlternativeGroup {
                original_item: entry.item.clone(),
                original_cost: entry.estimated_cost,
                alternatives,
            })
        })
        .collect()
}
