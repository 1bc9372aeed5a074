pub mod food;
pub mod inventory;
pub mod nutrition;
pub mod plan;

pub use food::{display_name, food_key, Category, FoodProfile};
pub use inventory::InventoryRecord;
pub use nutrition::{Nutrient, NutrientCheck, NutrientTarget, NutritionFacts, NutritionTotals};
pub use plan::{
    AlternativeGroup, AlternativeSuggestion, DailyAnalysis, InventoryUsage, MealPlanResult,
    MealType, NutritionAnalysis, SelectedMealItem, ShoppingListEntry,
};
