use tracing::{debug, trace};

use crate::catalog::FoodCatalog;
use crate::models::{Category, MealType, NutritionTotals, SelectedMealItem};
use crate::planner::budget::BudgetState;
use crate::planner::constants::required_categories;
use crate::planner::dietary::DietaryFilter;
use crate::planner::policy::NutritionPolicy;
use crate::planner::scoring::{score_candidate, ScoringWeights};
use crate::state::InventoryLedger;

/// Greedy per-slot food picker.
///
/// For each category a meal requires, every compatible catalog food is scored
/// and the single best one is served. There is no backtracking: once a slot is
/// filled its item, budget charge and inventory draw are final.
pub struct MealSelector<'a> {
    catalog: &'a FoodCatalog,
    policy: &'a NutritionPolicy,
    weights: &'a ScoringWeights,
    filter: DietaryFilter<'a>,
}

impl<'a> MealSelector<'a> {
    pub fn new(
        catalog: &'a FoodCatalog,
        policy: &'a NutritionPolicy,
        weights: &'a ScoringWeights,
        restrictions: Option<&str>,
    ) -> Self {
        Self {
            catalog,
            policy,
            weights,
            filter: DietaryFilter::new(catalog, restrictions),
        }
    }

    /// Score one candidate in the current run state.
    pub fn score_candidate(
        &self,
        ledger: &InventoryLedger,
        food_name: &str,
        meal_type: MealType,
        remaining_budget: f64,
        daily_so_far: &NutritionTotals,
    ) -> f64 {
        score_candidate(
            self.catalog,
            self.policy,
            ledger,
            self.weights,
            food_name,
            meal_type,
            remaining_budget,
            daily_so_far,
        )
    }

    /// Highest-scoring compatible food in `category`.
    ///
    /// Ties keep the food declared first in the catalog.
    pub fn best_candidate(
        &self,
        ledger: &InventoryLedger,
        category: Category,
        meal_type: MealType,
        remaining_budget: f64,
        daily_so_far: &NutritionTotals,
    ) -> Option<(&'a str, f64)> {
        let mut best: Option<(&'a str, f64)> = None;

        for name in self.catalog.by_category(category) {
            if !self.filter.is_compatible(name) {
                continue;
            }
            let score =
                self.score_candidate(ledger, name, meal_type, remaining_budget, daily_so_far);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((name, score)),
            }
        }

        best
    }

    /// Fill every category slot of one meal.
    ///
    /// Each served item is charged to `budget`, added to `daily`, and, when
    /// the pantry holds the food, drawn from `ledger`. Categories with no
    /// compatible food are skipped.
    pub fn select_for_slot(
        &self,
        ledger: &mut InventoryLedger,
        meal_type: MealType,
        day: u8,
        budget: &mut BudgetState,
        daily: &mut NutritionTotals,
    ) -> Vec<SelectedMealItem> {
        let mut selected = Vec::new();

        for &category in required_categories(meal_type) {
            let Some((name, score)) =
                self.best_candidate(ledger, category, meal_type, budget.remaining_today(), daily)
            else {
                debug!(day, meal = %meal_type, %category, "no compatible food, slot skipped");
                continue;
            };
            let Some(food) = self.catalog.get(name) else {
                continue;
            };

            let quantity = food.serving_size;
            let facts = self.catalog.calculate_nutrition(name, quantity);

            // Ledger quantities are drawn down in per-100 units of the serving.
            let (uses_inventory, inventory_item_id, notes) = match ledger.entry(name).cloned() {
                Some(entry) => {
                    ledger.consume(name, quantity / 100.0);
                    let notes = entry
                        .expiration_date
                        .map(|date| format!("From inventory - use by {}", date));
                    (true, Some(entry.id), notes)
                }
                None => (false, None, None),
            };

            trace!(
                day,
                meal = %meal_type,
                %category,
                food = name,
                score,
                cost = facts.cost,
                uses_inventory,
                "slot filled"
            );

            selected.push(SelectedMealItem {
                day_of_week: day,
                meal_type,
                food_name: food.display_name(),
                quantity,
                unit: food.unit.clone(),
                estimated_cost: facts.cost,
                calories: facts.calories,
                protein: facts.protein,
                carbs: facts.carbs,
                fats: facts.fats,
                fiber: facts.fiber,
                uses_inventory,
                inventory_item_id,
                notes,
            });

            budget.charge(facts.cost);
            daily.add(&facts);
        }

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InventoryRecord;
    use chrono::NaiveDate;

    fn selector_parts() -> (FoodCatalog, NutritionPolicy, ScoringWeights) {
        (
            FoodCatalog::builtin(),
            NutritionPolicy::default(),
            ScoringWeights::default(),
        )
    }

    #[test]
    fn test_breakfast_fills_four_categories() {
        let (catalog, policy, weights) = selector_parts();
        let selector = MealSelector::new(&catalog, &policy, &weights, None);
        let mut ledger = InventoryLedger::default();
        let mut budget = BudgetState::new(100.0, 7);
        let mut daily = NutritionTotals::default();

        let items =
            selector.select_for_slot(&mut ledger, MealType::Breakfast, 0, &mut budget, &mut daily);

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].food_name, "Oatmeal");
        let spent: f64 = items.iter().map(|i| i.estimated_cost).sum();
        assert!((budget.spent() - spent).abs() < 1e-9);
        let calories: f64 = items.iter().map(|i| i.calories).sum();
        assert!((daily.calories - calories).abs() < 1e-9);
    }

    #[test]
    fn test_snack_is_single_fruit() {
        let (catalog, policy, weights) = selector_parts();
        let selector = MealSelector::new(&catalog, &policy, &weights, None);
        let mut ledger = InventoryLedger::default();
        let mut budget = BudgetState::new(100.0, 7);
        let mut daily = NutritionTotals::default();

        let items =
            selector.select_for_slot(&mut ledger, MealType::Snack, 3, &mut budget, &mut daily);

        assert_eq!(items.len(), 1);
        let food = catalog.get(&items[0].food_name).unwrap();
        assert_eq!(food.category, Category::Fruit);
        assert_eq!(items[0].day_of_week, 3);
    }

    #[test]
    fn test_vegan_breakfast_skips_dairy() {
        let (catalog, policy, weights) = selector_parts();
        let selector = MealSelector::new(&catalog, &policy, &weights, Some("vegan"));
        let mut ledger = InventoryLedger::default();
        let mut budget = BudgetState::new(100.0, 7);
        let mut daily = NutritionTotals::default();

        let items =
            selector.select_for_slot(&mut ledger, MealType::Breakfast, 0, &mut budget, &mut daily);

        assert_eq!(items.len(), 3);
        assert!(items
            .iter()
            .all(|i| catalog.get(&i.food_name).unwrap().category != Category::Dairy));
    }

    #[test]
    fn test_inventory_item_is_drawn_down() {
        let (catalog, policy, weights) = selector_parts();
        let selector = MealSelector::new(&catalog, &policy, &weights, None);
        let record = InventoryRecord::new(
            "inv-7",
            "Chicken Breast",
            4.0,
            6.0,
            Some("protein".to_string()),
            NaiveDate::from_ymd_opt(2024, 12, 25),
        )
        .unwrap();
        let mut ledger = InventoryLedger::from_records(&[record]);
        let mut budget = BudgetState::new(100.0, 7);
        let mut daily = NutritionTotals::default();

        let items =
            selector.select_for_slot(&mut ledger, MealType::Lunch, 0, &mut budget, &mut daily);

        let chicken = &items[0];
        assert_eq!(chicken.food_name, "Chicken Breast");
        assert!(chicken.uses_inventory);
        assert_eq!(chicken.inventory_item_id.as_deref(), Some("inv-7"));
        assert_eq!(
            chicken.notes.as_deref(),
            Some("From inventory - use by 2024-12-25")
        );
        assert!((ledger.remaining("chicken_breast").unwrap() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let (catalog, policy, _) = selector_parts();
        // Flatten every factor so all candidates tie at the base score.
        let weights = ScoringWeights {
            over_budget_penalty: 0.0,
            cost_ratio_weight: 0.0,
            calorie_fit_weight: 0.0,
            protein_bonus: 0.0,
            fiber_bonus: 0.0,
            ..Default::default()
        };
        let selector = MealSelector::new(&catalog, &policy, &weights, None);
        let ledger = InventoryLedger::default();

        let (name, _) = selector
            .best_candidate(
                &ledger,
                Category::Vegetable,
                MealType::Dinner,
                10.0,
                &NutritionTotals::default(),
            )
            .unwrap();
        assert_eq!(name, "broccoli");
    }
}
