use crate::models::{Category, MealType, Nutrient, NutrientTarget};

/// Days planned per run (0 = Monday ... 6 = Sunday).
pub const DAYS_PER_WEEK: u8 = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Candidate scoring
// ─────────────────────────────────────────────────────────────────────────────

/// Score every candidate starts from.
pub const BASE_SCORE: f64 = 100.0;

/// Flat penalty when one serving costs more than what is left for the day.
pub const OVER_BUDGET_PENALTY: f64 = 40.0;

/// Penalty scale for serving cost as a share of the remaining budget.
pub const COST_RATIO_WEIGHT: f64 = 20.0;

/// Bonus for foods already in the pantry.
pub const INVENTORY_BONUS: f64 = 30.0;

/// Extra bonus when the pantry entry carries an expiration date.
pub const EXPIRATION_BONUS: f64 = 10.0;

/// Penalty scale for relative distance from the meal's calorie target.
pub const CALORIE_FIT_WEIGHT: f64 = 15.0;

/// Protein per serving (g) that earns the protein bonus.
pub const PROTEIN_BONUS_THRESHOLD: f64 = 15.0;
pub const PROTEIN_BONUS: f64 = 10.0;

/// Fiber per serving (g) that earns the fiber bonus.
pub const FIBER_BONUS_THRESHOLD: f64 = 3.0;
pub const FIBER_BONUS: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Nutrition policy
// ─────────────────────────────────────────────────────────────────────────────

/// Share of daily intake assumed for a meal type missing from the distribution.
pub const DEFAULT_MEAL_RATIO: f64 = 0.25;

/// General-guideline daily targets: (min, max, optimal).
pub const DAILY_TARGETS: [(Nutrient, NutrientTarget); 5] = [
    (Nutrient::Calories, NutrientTarget::new(1800.0, 2500.0, 2000.0)),
    (Nutrient::Protein, NutrientTarget::new(50.0, 150.0, 75.0)),
    (Nutrient::Carbs, NutrientTarget::new(225.0, 325.0, 275.0)),
    (Nutrient::Fats, NutrientTarget::new(44.0, 78.0, 65.0)),
    (Nutrient::Fiber, NutrientTarget::new(25.0, 35.0, 30.0)),
];

/// Share of the daily targets each meal should cover.
pub const MEAL_DISTRIBUTION: [(MealType, f64); 4] = [
    (MealType::Breakfast, 0.25),
    (MealType::Lunch, 0.35),
    (MealType::Dinner, 0.35),
    (MealType::Snack, 0.05),
];

// ─────────────────────────────────────────────────────────────────────────────
// Meal composition
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_CATEGORIES: [Category; 4] = [
    Category::Grain,
    Category::Protein,
    Category::Fruit,
    Category::Dairy,
];

/// Lunch and dinner take two independent vegetable picks.
pub const MAIN_MEAL_CATEGORIES: [Category; 4] = [
    Category::Protein,
    Category::Grain,
    Category::Vegetable,
    Category::Vegetable,
];

pub const SNACK_CATEGORIES: [Category; 1] = [Category::Fruit];

/// Category slots filled for a meal type, in selection order.
pub fn required_categories(meal_type: MealType) -> &'static [Category] {
    match meal_type {
        MealType::Breakfast => &BREAKFAST_CATEGORIES,
        MealType::Lunch | MealType::Dinner => &MAIN_MEAL_CATEGORIES,
        MealType::Snack => &SNACK_CATEGORIES,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reports
// ─────────────────────────────────────────────────────────────────────────────

/// Alternatives must cost at most this share of the original per 100 units.
pub const ALTERNATIVE_COST_RATIO: f64 = 0.8;

/// Ratio used when browsing alternatives outside of a plan.
pub const BROWSE_ALTERNATIVE_RATIO: f64 = 1.2;

/// Shopping lines considered for cheaper alternatives.
pub const MAX_EXPENSIVE_ITEMS: usize = 5;

/// Alternatives reported per shopping line.
pub const MAX_ALTERNATIVES_PER_ITEM: usize = 3;

/// Points split across nutrients for the overall nutrition score.
pub const NUTRITION_SCORE_MAX: f64 = 100.0;
