use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{MealType, Nutrient, NutrientCheck, NutrientTarget, NutritionTotals};
use crate::planner::constants::{DAILY_TARGETS, DEFAULT_MEAL_RATIO, MEAL_DISTRIBUTION};

/// Daily nutrient targets and how they are split across meals.
///
/// When deserialized, each map is layered over the defaults: entries that are
/// not mentioned keep their compiled-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionPolicy {
    #[serde(deserialize_with = "targets_over_defaults")]
    pub targets: BTreeMap<Nutrient, NutrientTarget>,
    #[serde(deserialize_with = "distribution_over_defaults")]
    pub meal_distribution: BTreeMap<MealType, f64>,
}

fn targets_over_defaults<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<Nutrient, NutrientTarget>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<Nutrient, NutrientTarget>::deserialize(deserializer)?;
    let mut targets: BTreeMap<_, _> = DAILY_TARGETS.into_iter().collect();
    targets.extend(overrides);
    Ok(targets)
}

fn distribution_over_defaults<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<MealType, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<MealType, f64>::deserialize(deserializer)?;
    let mut distribution: BTreeMap<_, _> = MEAL_DISTRIBUTION.into_iter().collect();
    distribution.extend(overrides);
    Ok(distribution)
}

impl Default for NutritionPolicy {
    fn default() -> Self {
        Self {
            targets: DAILY_TARGETS.into_iter().collect(),
            meal_distribution: MEAL_DISTRIBUTION.into_iter().collect(),
        }
    }
}

impl NutritionPolicy {
    /// Share of the daily target assigned to a meal type.
    pub fn meal_ratio(&self, meal_type: MealType) -> f64 {
        self.meal_distribution
            .get(&meal_type)
            .copied()
            .unwrap_or(DEFAULT_MEAL_RATIO)
    }

    /// Optimal amount of `nutrient` a single meal should provide.
    ///
    /// Nutrients without a target require nothing.
    pub fn meal_requirement(&self, nutrient: Nutrient, meal_type: MealType) -> f64 {
        self.targets
            .get(&nutrient)
            .map(|t| t.optimal * self.meal_ratio(meal_type))
            .unwrap_or(0.0)
    }

    /// Check a day's totals against every targeted nutrient.
    pub fn validate_daily(&self, totals: &NutritionTotals) -> BTreeMap<Nutrient, NutrientCheck> {
        self.targets
            .iter()
            .map(|(&nutrient, target)| {
                let actual = totals.get(nutrient);
                let percentage_of_optimal = if target.optimal > 0.0 {
                    actual / target.optimal * 100.0
                } else {
                    0.0
                };
                let check = NutrientCheck {
                    actual,
                    min: target.min,
                    max: target.max,
                    optimal: target.optimal,
                    meets_min: actual >= target.min,
                    within_range: target.min <= actual && actual <= target.max,
                    percentage_of_optimal,
                };
                (nutrient, check)
            })
            .collect()
    }
}
