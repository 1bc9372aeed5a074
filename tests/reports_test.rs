use assert_float_eq::*;

use nourish_planner::config::PlannerConfig;
use nourish_planner::models::{InventoryRecord, Nutrient};
use nourish_planner::planner::{PlanRequest, WeeklyPlanner};
use nourish_planner::reports::{build_shopping_list, nutrition_score, summarize_inventory_usage};
use nourish_planner::{FoodCatalog, MealPlanResult};

fn week(inventory: Vec<InventoryRecord>) -> (FoodCatalog, MealPlanResult) {
    let catalog = FoodCatalog::builtin();
    let config = PlannerConfig::default();
    let request = PlanRequest::new(100.0, inventory, None, None).unwrap();
    let result = WeeklyPlanner::new(&catalog, &config).optimize(&request);
    (catalog, result)
}

#[test]
fn test_shopping_list_covers_purchased_items() {
    let (catalog, result) = week(vec![]);
    let list = &result.shopping_list;

    let categories: Vec<&str> = list.iter().map(|e| e.category.as_str()).collect();
    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);

    let mut names: Vec<&str> = list.iter().map(|e| e.item.as_str()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), list.len());

    let list_cost: f64 = list.iter().map(|e| e.estimated_cost).sum();
    assert_float_absolute_eq!(list_cost, result.total_cost, 0.25);

    assert_eq!(build_shopping_list(&catalog, &result.meal_plan_items), *list);
}

#[test]
fn test_oatmeal_line_aggregates_every_serving() {
    let (_, result) = week(vec![]);

    let servings = result
        .meal_plan_items
        .iter()
        .filter(|i| i.food_name == "Oatmeal")
        .count();
    let line = result
        .shopping_list
        .iter()
        .find(|e| e.item == "Oatmeal")
        .unwrap();

    assert_eq!(line.quantity, 50.0 * servings as f64);
    assert_eq!(line.unit, "g");
    assert_eq!(line.category, "grain");
}

#[test]
fn test_alternatives_are_cheaper_and_bounded() {
    let (catalog, result) = week(vec![]);

    assert!(result.alternatives.len() <= 5);
    for group in &result.alternatives {
        let original = catalog.get(&group.original_item).unwrap();
        assert!(!group.alternatives.is_empty());
        assert!(group.alternatives.len() <= 3);
        for alt in &group.alternatives {
            let food = catalog.get(&alt.name).unwrap();
            assert_eq!(food.category, original.category);
            assert!(alt.cost_per_100 <= original.cost_per_100 * 0.8);
            assert!(alt.estimated_savings >= 0.0);
        }
    }
}

#[test]
fn test_nutrition_analysis_shape() {
    let (_, result) = week(vec![]);
    let analysis = &result.nutrition_analysis;

    assert_eq!(analysis.daily_analyses.len(), 7);
    assert_eq!(analysis.weekly_averages.len(), 5);
    assert!(analysis.overall_score <= 100);
    assert_eq!(analysis.overall_score, nutrition_score(&analysis.weekly_validation));

    let day_calories: f64 = analysis
        .daily_analyses
        .iter()
        .map(|d| d.checks[&Nutrient::Calories].actual)
        .sum();
    assert_float_absolute_eq!(
        analysis.weekly_averages[&Nutrient::Calories],
        day_calories / 7.0,
        0.05
    );
}

#[test]
fn test_inventory_usage_matches_items() {
    let tofu = InventoryRecord::new("inv-tofu", "tofu", 20.0, 2.5, None, None).unwrap();
    let (_, result) = week(vec![tofu]);

    let usage = &result.inventory_usage;
    assert_eq!(usage, &summarize_inventory_usage(&result.meal_plan_items));
    assert_eq!(usage.total_meals, result.meal_plan_items.len());
    assert!(usage.meals_from_inventory > 0);
    assert_eq!(
        usage.waste_reduction,
        format!("{} items used from inventory to reduce waste", usage.meals_from_inventory)
    );
}
