use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info};

use crate::catalog::FoodCatalog;
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::models::{InventoryRecord, MealPlanResult, MealType, NutritionTotals, SelectedMealItem};
use crate::planner::budget::BudgetState;
use crate::planner::constants::DAYS_PER_WEEK;
use crate::planner::selector::MealSelector;
use crate::reports::{
    analyze_nutrition, build_shopping_list, round_to, suggest_alternatives,
    summarize_inventory_usage,
};
use crate::state::InventoryLedger;

/// Validated input for one planning run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanRequest {
    pub budget: f64,
    pub inventory: Vec<InventoryRecord>,
    pub restrictions: Option<String>,
    /// Reserved. Carried through but not yet used for scoring.
    pub preferences: Option<String>,
}

impl PlanRequest {
    pub fn new(
        budget: f64,
        inventory: Vec<InventoryRecord>,
        restrictions: Option<String>,
        preferences: Option<String>,
    ) -> Result<Self> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "budget must be a non-negative number, got {}",
                budget
            )));
        }
        // Consumption is reconciled by record id, so ids must be unique.
        let mut ids = HashSet::new();
        for record in &inventory {
            record.validate()?;
            if !ids.insert(record.id.as_str()) {
                return Err(PlannerError::InvalidInput(format!(
                    "duplicate inventory id '{}'",
                    record.id
                )));
            }
        }

        Ok(Self {
            budget,
            inventory,
            restrictions: restrictions.filter(|r| !r.trim().is_empty()),
            preferences: preferences.filter(|p| !p.trim().is_empty()),
        })
    }
}

/// Runs the 7-day x 4-meal greedy pass and the reports over its output.
pub struct WeeklyPlanner<'a> {
    catalog: &'a FoodCatalog,
    config: &'a PlannerConfig,
}

impl<'a> WeeklyPlanner<'a> {
    pub fn new(catalog: &'a FoodCatalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Plan a week against a fresh ledger built from the request's inventory.
    pub fn optimize(&self, request: &PlanRequest) -> MealPlanResult {
        let mut ledger = InventoryLedger::from_records(&request.inventory);
        self.optimize_with_ledger(request, &mut ledger)
    }

    /// Plan a week drawing from `ledger`, which is left holding what remains.
    ///
    /// Use this when the caller needs [`InventoryLedger::reconcile`] afterwards.
    pub fn optimize_with_ledger(
        &self,
        request: &PlanRequest,
        ledger: &mut InventoryLedger,
    ) -> MealPlanResult {
        let selector = MealSelector::new(
            self.catalog,
            &self.config.nutrition,
            &self.config.scoring,
            request.restrictions.as_deref(),
        );
        let mut budget = BudgetState::new(request.budget, DAYS_PER_WEEK);
        let mut items: Vec<SelectedMealItem> = Vec::new();
        let mut daily_totals = Vec::with_capacity(DAYS_PER_WEEK as usize);

        for day in 0..DAYS_PER_WEEK {
            budget.start_day();
            let mut daily = NutritionTotals::default();

            for meal_type in MealType::ALL {
                let slot = selector.select_for_slot(ledger, meal_type, day, &mut budget, &mut daily);
                items.extend(slot);
            }

            debug!(
                day,
                calories = daily.calories,
                remaining = budget.remaining_today(),
                "day planned"
            );
            daily_totals.push(daily);
        }

        let shopping_list = build_shopping_list(self.catalog, &items);
        let nutrition_analysis = analyze_nutrition(&self.config.nutrition, &daily_totals);
        let alternatives = suggest_alternatives(self.catalog, &shopping_list);
        let inventory_usage = summarize_inventory_usage(&items);

        let total_cost = round_to(items.iter().map(|i| i.estimated_cost).sum(), 2);
        let budget_utilization = if request.budget > 0.0 {
            round_to(total_cost / request.budget * 100.0, 1)
        } else {
            0.0
        };

        info!(
            items = items.len(),
            total_cost,
            budget = request.budget,
            from_inventory = inventory_usage.meals_from_inventory,
            nutrition_score = nutrition_analysis.overall_score,
            "weekly plan generated"
        );

        MealPlanResult {
            meal_plan_items: items,
            shopping_list,
            total_cost,
            budget: request.budget,
            budget_remaining: request.budget - total_cost,
            budget_utilization,
            nutrition_analysis,
            alternatives,
            inventory_usage,
            generated_at: Utc::now(),
        }
    }
}
