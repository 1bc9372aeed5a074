mod data;

use std::collections::{HashMap, HashSet};

use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{food_key, Category, FoodProfile, NutritionFacts};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Read-only table of food profiles.
///
/// Iteration follows declaration order, which the planner relies on for
/// deterministic tie-breaking.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    foods: Vec<FoodProfile>,
    /// Catalog key to position in `foods`.
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// The built-in reference catalog.
    pub fn builtin() -> Self {
        Self::build(data::builtin_profiles())
    }

    /// Build a catalog from caller-supplied profiles.
    ///
    /// Names are normalized to catalog keys; invalid profiles and duplicate
    /// keys are rejected.
    pub fn from_profiles(profiles: Vec<FoodProfile>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(profiles.len());

        for mut profile in profiles {
            profile.name = food_key(&profile.name);
            if !profile.is_valid() {
                return Err(PlannerError::InvalidInput(format!(
                    "invalid food profile '{}'",
                    profile.name
                )));
            }
            if !seen.insert(profile.name.clone()) {
                return Err(PlannerError::InvalidInput(format!(
                    "duplicate food profile '{}'",
                    profile.name
                )));
            }
            normalized.push(profile);
        }

        Ok(Self::build(normalized))
    }

    fn build(foods: Vec<FoodProfile>) -> Self {
        let index = foods
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name.clone(), i))
            .collect();
        Self { foods, index }
    }

    /// Look up a profile by key or display name.
    pub fn get(&self, name: &str) -> Option<&FoodProfile> {
        self.index.get(&food_key(name)).map(|&i| &self.foods[i])
    }

    /// Keys of all foods in a category, in declaration order.
    pub fn by_category(&self, category: Category) -> Vec<&str> {
        self.foods
            .iter()
            .filter(|f| f.category == category)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Nutrition and cost for `quantity` units, scaled from the per-100 profile.
    ///
    /// Unknown foods yield all zeros.
    pub fn calculate_nutrition(&self, name: &str, quantity: f64) -> NutritionFacts {
        let Some(food) = self.get(name) else {
            return NutritionFacts::default();
        };

        let factor = quantity / 100.0;
        NutritionFacts {
            calories: food.calories * factor,
            protein: food.protein * factor,
            carbs: food.carbs * factor,
            fats: food.fats * factor,
            fiber: food.fiber * factor,
            cost: food.cost_per_100 * factor,
        }
    }

    /// Same-category foods whose per-100 cost is at most `max_cost_ratio`
    /// times the original's, in declaration order.
    pub fn find_alternatives(&self, name: &str, max_cost_ratio: f64) -> Vec<&str> {
        let Some(food) = self.get(name) else {
            return Vec::new();
        };

        let max_cost = food.cost_per_100 * max_cost_ratio;
        self.foods
            .iter()
            .filter(|f| f.name != food.name && f.category == food.category)
            .filter(|f| f.cost_per_100 <= max_cost)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Case-insensitive substring search over keys, optionally within one category.
    pub fn search(&self, query: &str, category: Option<Category>) -> Vec<&FoodProfile> {
        let needle = food_key(query);
        self.foods
            .iter()
            .filter(|f| category.is_none_or(|c| f.category == c))
            .filter(|f| f.name.contains(&needle))
            .collect()
    }

    /// Distinct categories present, sorted by name.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.foods.iter().map(|f| f.category).collect();
        categories.sort_by_key(|c| c.as_str());
        categories.dedup();
        categories
    }

    /// Closest known keys for a name that missed, best first.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<&str> {
        let key = food_key(name);
        let mut candidates: Vec<(&str, f64)> = self
            .foods
            .iter()
            .map(|f| (f.name.as_str(), jaro_winkler(&f.name, &key)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().take(limit).map(|(n, _)| n).collect()
    }

    /// Strict lookup for boundary code that must report a miss.
    pub fn require(&self, name: &str) -> Result<&FoodProfile> {
        self.get(name).ok_or_else(|| {
            let suggestions = self.suggest(name, 3);
            if suggestions.is_empty() {
                PlannerError::FoodNotFound(name.to_string())
            } else {
                PlannerError::FoodNotFound(format!(
                    "{} (did you mean: {}?)",
                    name,
                    suggestions.join(", ")
                ))
            }
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodProfile> {
        self.foods.iter()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
