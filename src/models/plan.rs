use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::nutrition::{Nutrient, NutrientCheck};

/// Meal occasions planned each day, in planning order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MealType::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| PlannerError::InvalidInput(format!("unknown meal type '{}'", s)))
    }
}

/// One filled category slot of the weekly plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedMealItem {
    /// 0 = Monday ... 6 = Sunday.
    pub day_of_week: u8,
    pub meal_type: MealType,
    /// Display name, e.g. "Chicken Breast".
    pub food_name: String,
    pub quantity: f64,
    pub unit: String,
    pub estimated_cost: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
    pub uses_inventory: bool,
    pub inventory_item_id: Option<String>,
    pub notes: Option<String>,
}

/// Aggregated purchase line for foods not covered by inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListEntry {
    pub item: String,
    pub quantity: f64,
    pub unit: String,
    pub estimated_cost: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeSuggestion {
    pub name: String,
    pub cost_per_100: f64,
    pub estimated_savings: f64,
}

/// Cheaper same-category options for one expensive shopping line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeGroup {
    pub original_item: String,
    pub original_cost: f64,
    pub alternatives: Vec<AlternativeSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAnalysis {
    pub day: u8,
    pub checks: BTreeMap<Nutrient, NutrientCheck>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAnalysis {
    pub daily_analyses: Vec<DailyAnalysis>,
    pub weekly_averages: BTreeMap<Nutrient, f64>,
    pub weekly_validation: BTreeMap<Nutrient, NutrientCheck>,
    /// 0 to 100.
    pub overall_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryUsage {
    pub total_meals: usize,
    pub meals_from_inventory: usize,
    pub inventory_usage_percentage: f64,
    pub estimated_cost_saved: f64,
    pub waste_reduction: String,
}

/// Everything produced by one weekly planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanResult {
    pub meal_plan_items: Vec<SelectedMealItem>,
    pub shopping_list: Vec<ShoppingListEntry>,
    pub total_cost: f64,
    pub budget: f64,
    pub budget_remaining: f64,
    /// Percent of budget spent, one decimal.
    pub budget_utilization: f64,
    pub nutrition_analysis: NutritionAnalysis,
    pub alternatives: Vec<AlternativeGroup>,
    pub inventory_usage: InventoryUsage,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_order_and_parse() {
        assert_eq!(MealType::ALL[0], MealType::Breakfast);
        assert_eq!(MealType::ALL[3], MealType::Snack);
        assert_eq!("Dinner".parse::<MealType>().unwrap(), MealType::Dinner);
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = SelectedMealItem {
            day_of_week: 2,
            meal_type: MealType::Lunch,
            food_name: "Tofu".to_string(),
            quantity: 150.0,
            unit: "g".to_string(),
            estimated_cost: 37.5,
            calories: 114.0,
            protein: 12.0,
            carbs: 2.85,
            fats: 7.2,
            fiber: 0.45,
            uses_inventory: false,
            inventory_item_id: None,
            notes: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["dayOfWeek"], 2);
        assert_eq!(json["mealType"], "lunch");
        assert_eq!(json["usesInventory"], false);
    }
}
