use assert_float_eq::*;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use nourish_planner::config::PlannerConfig;
use nourish_planner::models::{food_key, Category, InventoryRecord, MealType, NutritionTotals};
use nourish_planner::planner::dietary::{ANIMAL_PRODUCTS, MEAT_AND_FISH};
use nourish_planner::planner::{BudgetState, MealSelector, PlanRequest, WeeklyPlanner};
use nourish_planner::state::InventoryLedger;
use nourish_planner::{FoodCatalog, MealPlanResult};

fn run(budget: f64, inventory: Vec<InventoryRecord>, restrictions: Option<&str>) -> MealPlanResult {
    let catalog = FoodCatalog::builtin();
    let config = PlannerConfig::default();
    let request =
        PlanRequest::new(budget, inventory, restrictions.map(str::to_string), None).unwrap();
    WeeklyPlanner::new(&catalog, &config).optimize(&request)
}

fn random_inventory(rng: &mut StdRng) -> Vec<InventoryRecord> {
    let catalog = FoodCatalog::builtin();
    let mut names: Vec<String> = catalog.iter().map(|f| f.name.clone()).collect();
    names.shuffle(&mut *rng);

    let count = rng.gen_range(1..=6);
    names
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(i, name)| {
            let expires = rng
                .gen_bool(0.5)
                .then(|| NaiveDate::from_ymd_opt(2025, 1, rng.gen_range(1..=28)))
                .flatten();
            InventoryRecord::new(
                format!("inv-{}", i),
                name.replace('_', " "),
                rng.gen_range(0.5..6.0),
                rng.gen_range(0.0..10.0),
                None,
                expires,
            )
            .unwrap()
        })
        .collect()
}

#[test]
fn test_default_week_totals_are_consistent() {
    let result = run(100.0, vec![], None);

    assert_eq!(result.meal_plan_items.len(), 91);
    assert!(result.meal_plan_items.len() <= 112);

    let summed: f64 = result.meal_plan_items.iter().map(|i| i.estimated_cost).sum();
    assert_float_absolute_eq!(summed, result.total_cost, 0.01);
    assert_eq!(result.budget_remaining, result.budget - result.total_cost);

    let expected_utilization = (result.total_cost / 100.0 * 100.0 * 10.0).round() / 10.0;
    assert_eq!(result.budget_utilization, expected_utilization);

    for item in &result.meal_plan_items {
        assert!(item.quantity > 0.0);
        assert!(item.estimated_cost >= 0.0);
        assert!(!item.uses_inventory);
    }
}

#[test]
fn test_items_follow_day_and_meal_order() {
    let result = run(100.0, vec![], None);

    let order: Vec<(u8, MealType)> = result
        .meal_plan_items
        .iter()
        .map(|i| (i.day_of_week, i.meal_type))
        .collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);

    let first_day: Vec<&str> = result
        .meal_plan_items
        .iter()
        .take(4)
        .map(|i| i.food_name.as_str())
        .collect();
    assert_eq!(first_day[0], "Oatmeal");
}

#[test]
fn test_vegetarian_plan_has_no_meat_or_fish() {
    let result = run(100.0, vec![], Some("vegetarian"));
    assert!(!result.meal_plan_items.is_empty());

    for item in &result.meal_plan_items {
        let key = food_key(&item.food_name);
        assert!(!MEAT_AND_FISH.contains(&key.as_str()), "{} served", key);
    }
}

#[test]
fn test_vegan_plan_has_no_animal_products() {
    let catalog = FoodCatalog::builtin();
    let result = run(100.0, vec![], Some("Vegan"));

    // Breakfast loses its dairy slot: 3 + 4 + 4 + 1 per day.
    assert_eq!(result.meal_plan_items.len(), 84);
    for item in &result.meal_plan_items {
        let food = catalog.get(&item.food_name).unwrap();
        assert_ne!(food.category, Category::Dairy);
        assert!(!MEAT_AND_FISH.contains(&food.name.as_str()));
        assert!(!ANIMAL_PRODUCTS.contains(&food.name.as_str()));
    }
}

#[test]
fn test_gluten_free_plan_skips_bread_and_pasta() {
    let result = run(100.0, vec![], Some("gluten-free"));
    for item in &result.meal_plan_items {
        let key = food_key(&item.food_name);
        assert!(!key.contains("bread") && !key.contains("pasta"));
    }
}

#[test]
fn test_single_serving_entry_is_used_once() {
    let chicken = InventoryRecord::new(
        "inv-chicken",
        "Chicken Breast",
        1.5,
        4.8,
        Some("protein".to_string()),
        NaiveDate::from_ymd_opt(2024, 12, 25),
    )
    .unwrap();

    let result = run(100.0, vec![chicken], None);

    let from_pantry: Vec<_> = result
        .meal_plan_items
        .iter()
        .filter(|i| i.inventory_item_id.as_deref() == Some("inv-chicken"))
        .collect();
    assert_eq!(from_pantry.len(), 1);
    assert_eq!(from_pantry[0].day_of_week, 0);
    assert_eq!(from_pantry[0].meal_type, MealType::Breakfast);
    assert_eq!(
        from_pantry[0].notes.as_deref(),
        Some("From inventory - use by 2024-12-25")
    );
    assert_eq!(result.inventory_usage.meals_from_inventory, 1);
}

#[test]
fn test_pantry_only_food_never_reaches_shopping_list() {
    let oats = InventoryRecord::new("inv-oats", "oatmeal", 100.0, 3.0, None, None).unwrap();
    let result = run(100.0, vec![oats], None);

    assert!(result
        .meal_plan_items
        .iter()
        .filter(|i| i.food_name == "Oatmeal")
        .all(|i| i.uses_inventory));
    assert!(result.shopping_list.iter().all(|e| e.item != "Oatmeal"));
    assert!(result.inventory_usage.meals_from_inventory >= 7);
}

#[test]
fn test_identical_inputs_give_identical_plans() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10 {
        let inventory = random_inventory(&mut rng);
        let budget = rng.gen_range(0.0..300.0);

        let first = run(budget, inventory.clone(), None);
        let second = run(budget, inventory, None);

        assert_eq!(first.meal_plan_items, second.meal_plan_items);
        assert_eq!(first.shopping_list, second.shopping_list);
        assert_eq!(first.total_cost, second.total_cost);
    }
}

#[test]
fn test_ledger_quantities_never_increase() {
    let catalog = FoodCatalog::builtin();
    let config = PlannerConfig::default();
    let selector = MealSelector::new(&catalog, &config.nutrition, &config.scoring, None);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..10 {
        let inventory = random_inventory(&mut rng);
        let mut ledger = InventoryLedger::from_records(&inventory);
        let mut budget = BudgetState::new(100.0, 7);
        let mut last: Vec<f64> = inventory
            .iter()
            .map(|r| ledger.remaining(&r.name).unwrap_or(0.0))
            .collect();

        for day in 0..7 {
            budget.start_day();
            let mut daily = NutritionTotals::default();
            for meal_type in MealType::ALL {
                selector.select_for_slot(&mut ledger, meal_type, day, &mut budget, &mut daily);

                for (record, previous) in inventory.iter().zip(last.iter_mut()) {
                    let now = ledger.remaining(&record.name).unwrap_or(0.0);
                    assert!(now >= 0.0);
                    assert!(now <= *previous);
                    *previous = now;
                }
            }
        }

        for record in ledger.reconcile(&inventory) {
            assert!(record.quantity >= 0.0);
        }
    }
}
