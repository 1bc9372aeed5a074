use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::{NutritionPolicy, ScoringWeights};

/// Runtime-tunable planner settings.
///
/// Every field falls back to the compiled-in constants, so a config file only
/// needs the values it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub scoring: ScoringWeights,
    pub nutrition: NutritionPolicy,
}

impl PlannerConfig {
    /// Reject settings that would make scores or reports meaningless.
    pub fn validate(&self) -> Result<()> {
        for (nutrient, target) in &self.nutrition.targets {
            if target.min > target.max || target.optimal < 0.0 {
                return Err(PlannerError::InvalidInput(format!(
                    "inconsistent target for {}",
                    nutrient
                )));
            }
        }
        for (meal_type, ratio) in &self.nutrition.meal_distribution {
            if !ratio.is_finite() || *ratio < 0.0 {
                return Err(PlannerError::InvalidInput(format!(
                    "invalid distribution ratio for {}",
                    meal_type
                )));
            }
        }
        Ok(())
    }
}

/// Load planner settings from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlannerConfig> {
    let content = fs::read_to_string(path)?;
    let config: PlannerConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
