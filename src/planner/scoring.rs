use serde::{Deserialize, Serialize};

use crate::catalog::FoodCatalog;
use crate::models::{MealType, Nutrient, NutritionTotals};
use crate::planner::constants::*;
use crate::planner::policy::NutritionPolicy;
use crate::state::InventoryLedger;

/// Tunable weights of the candidate score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub base_score: f64,
    pub over_budget_penalty: f64,
    pub cost_ratio_weight: f64,
    pub inventory_bonus: f64,
    pub expiration_bonus: f64,
    pub calorie_fit_weight: f64,
    pub protein_bonus_threshold: f64,
    pub protein_bonus: f64,
    pub fiber_bonus_threshold: f64,
    pub fiber_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_score: BASE_SCORE,
            over_budget_penalty: OVER_BUDGET_PENALTY,
            cost_ratio_weight: COST_RATIO_WEIGHT,
            inventory_bonus: INVENTORY_BONUS,
            expiration_bonus: EXPIRATION_BONUS,
            calorie_fit_weight: CALORIE_FIT_WEIGHT,
            protein_bonus_threshold: PROTEIN_BONUS_THRESHOLD,
            protein_bonus: PROTEIN_BONUS,
            fiber_bonus_threshold: FIBER_BONUS_THRESHOLD,
            fiber_bonus: FIBER_BONUS,
        }
    }
}

/// Score of one candidate, split by factor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CandidateScore {
    pub base: f64,
    /// Always zero or negative.
    pub cost: f64,
    pub inventory: f64,
    /// Always zero or negative.
    pub calorie_fit: f64,
    pub macro_bonus: f64,
}

impl CandidateScore {
    /// Sum of all factors, never below zero.
    pub fn total(&self) -> f64 {
        (self.base + self.cost + self.inventory + self.calorie_fit + self.macro_bonus).max(0.0)
    }
}

/// Cost penalty for one serving against what is left of the day's budget.
///
/// A serving that does not fit takes the flat penalty; otherwise the penalty
/// scales with the share of the remaining budget it would use.
pub fn cost_penalty(serving_cost: f64, remaining_budget: f64, weights: &ScoringWeights) -> f64 {
    if serving_cost > remaining_budget {
        return -weights.over_budget_penalty;
    }
    let ratio = if remaining_budget > 0.0 {
        serving_cost / remaining_budget
    } else {
        1.0
    };
    -weights.cost_ratio_weight * ratio
}

/// Penalty for how far a serving's calories land from the meal's target.
pub fn calorie_fit_penalty(actual_calories: f64, required: f64, weights: &ScoringWeights) -> f64 {
    let diff_ratio = if required > 0.0 {
        (actual_calories - required).abs() / required
    } else {
        1.0
    };
    -weights.calorie_fit_weight * diff_ratio
}

/// Multi-factor score for serving one canonical portion of `food_name`.
///
/// Unknown foods score zero. `_daily_so_far` is accepted for parity with the
/// slot state but does not currently influence the score.
#[allow(clippy::too_many_arguments)]
pub fn score_breakdown(
    catalog: &FoodCatalog,
    policy: &NutritionPolicy,
    ledger: &InventoryLedger,
    weights: &ScoringWeights,
    food_name: &str,
    meal_type: MealType,
    remaining_budget: f64,
    _daily_so_far: &NutritionTotals,
) -> CandidateScore {
    let Some(food) = catalog.get(food_name) else {
        return CandidateScore::default();
    };

    let factor = food.serving_factor();
    let mut score = CandidateScore {
        base: weights.base_score,
        cost: cost_penalty(food.serving_cost(), remaining_budget, weights),
        ..Default::default()
    };

    // Any dated pantry entry earns the expiration bonus, not only the soonest one.
    if let Some(entry) = ledger.entry(&food.name) {
        score.inventory += weights.inventory_bonus;
        if entry.expiration_date.is_some() {
            score.inventory += weights.expiration_bonus;
        }
    }

    let required = policy.meal_requirement(Nutrient::Calories, meal_type);
    score.calorie_fit = calorie_fit_penalty(food.calories * factor, required, weights);

    if food.protein * factor >= weights.protein_bonus_threshold {
        score.macro_bonus += weights.protein_bonus;
    }
    if food.fiber * factor >= weights.fiber_bonus_threshold {
        score.macro_bonus += weights.fiber_bonus;
    }

    score
}

/// Clamped total of [`score_breakdown`].
#[allow(clippy::too_many_arguments)]
pub fn score_candidate(
    catalog: &FoodCatalog,
    policy: &NutritionPolicy,
    ledger: &InventoryLedger,
    weights: &ScoringWeights,
    food_name: &str,
    meal_type: MealType,
    remaining_budget: f64,
    daily_so_far: &NutritionTotals,
) -> f64 {
    score_breakdown(
        catalog,
        policy,
        ledger,
        weights,
        food_name,
        meal_type,
        remaining_budget,
        daily_so_far,
    )
    .total()
}
