use std::collections::BTreeMap;

use crate::models::{DailyAnalysis, Nutrient, NutrientCheck, NutritionAnalysis, NutritionTotals};
use crate::planner::constants::NUTRITION_SCORE_MAX;
use crate::planner::NutritionPolicy;
use crate::reports::round_to;

/// Validate each day and the weekly averages against the policy.
///
/// Averages divide by the number of days supplied (seven for a full plan)
/// and are rounded to one decimal before the weekly validation.
pub fn analyze_nutrition(policy: &NutritionPolicy, daily: &[NutritionTotals]) -> NutritionAnalysis {
    let daily_analyses = daily
        .iter()
        .enumerate()
        .map(|(day, totals)| DailyAnalysis {
            day: day as u8,
            checks: policy.validate_daily(totals),
        })
        .collect();

    let days = daily.len().max(1) as f64;
    let mut averages = NutritionTotals::default();
    let mut weekly_averages = BTreeMap::new();
    for nutrient in Nutrient::ALL {
        let total: f64 = daily.iter().map(|t| t.get(nutrient)).sum();
        let average = round_to(total / days, 1);
        averages.set(nutrient, average);
        weekly_averages.insert(nutrient, average);
    }

    let weekly_validation = policy.validate_daily(&averages);
    let overall_score = nutrition_score(&weekly_validation);

    NutritionAnalysis {
        daily_analyses,
        weekly_averages,
        weekly_validation,
        overall_score,
    }
}

/// 0-100 score: each nutrient earns half its share for meeting the minimum
/// and half for staying within range.
pub fn nutrition_score(validation: &BTreeMap<Nutrient, NutrientCheck>) -> u32 {
    if validation.is_empty() {
        return 0;
    }

    let share = NUTRITION_SCORE_MAX / 2.0 / validation.len() as f64;
    let score: f64 = validation
        .values()
        .map(|check| {
            let mut points = 0.0;
            if check.meets_min {
                points += share;
            }
            if check.within_range {
                points += share;
            }
            points
        })
        .sum();

    score.round() as u32
}
