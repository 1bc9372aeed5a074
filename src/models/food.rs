use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Food group a profile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Grain,
    Vegetable,
    Fruit,
    Dairy,
    Fat,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Protein,
        Category::Grain,
        Category::Vegetable,
        Category::Fruit,
        Category::Dairy,
        Category::Fat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Protein => "protein",
            Category::Grain => "grain",
            Category::Vegetable => "vegetable",
            Category::Fruit => "fruit",
            Category::Dairy => "dairy",
            Category::Fat => "fat",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| PlannerError::InvalidInput(format!("unknown category '{}'", s)))
    }
}

/// Reference profile for one food.
///
/// Cost and macros are expressed per 100 units of `unit` (grams or millilitres).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodProfile {
    /// Catalog key, lower snake case (e.g. `chicken_breast`).
    pub name: String,
    pub category: Category,
    pub cost_per_100: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
    /// Canonical quantity used when the food is selected.
    pub serving_size: f64,
    pub unit: String,
}

impl FoodProfile {
    /// Multiplier from the per-100 figures to one canonical serving.
    #[inline]
    pub fn serving_factor(&self) -> f64 {
        self.serving_size / 100.0
    }

    /// Cost of one canonical serving.
    #[inline]
    pub fn serving_cost(&self) -> f64 {
        self.cost_per_100 * self.serving_factor()
    }

    /// Basic validation: a key, non-negative figures and a positive serving.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && [
                self.cost_per_100,
                self.calories,
                self.protein,
                self.carbs,
                self.fats,
                self.fiber,
            ]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
            && self.serving_size.is_finite()
            && self.serving_size > 0.0
    }

    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }
}

/// Normalize a free-form food name into a catalog key.
///
/// `"Chicken Breast"` becomes `"chicken_breast"`. Runs of whitespace and
/// underscores collapse to one `_`, so a key survives a trip through
/// [`display_name`].
pub fn food_key(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|w| !w.is_empty())
        .collect::<Vec<&str>>()
        .join("_")
}

/// Human-readable title-case name for a catalog key.
pub fn display_name(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> FoodProfile {
        FoodProfile {
            name: "chicken_breast".to_string(),
            category: Category::Protein,
            cost_per_100: 32.0,
            calories: 165.0,
            protein: 31.0,
            carbs: 0.0,
            fats: 3.6,
            fiber: 0.0,
            serving_size: 150.0,
            unit: "g".to_string(),
        }
    }

    #[test]
    fn test_serving_cost() {
        let food = sample_profile();
        assert!((food.serving_cost() - 48.0).abs() < 0.001);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_profile().is_valid());

        let mut invalid = sample_profile();
        invalid.serving_size = 0.0;
        assert!(!invalid.is_valid());

        let mut negative = sample_profile();
        negative.fats = -1.0;
        assert!(!negative.is_valid());
    }

    #[test]
    fn test_name_round_trip() {
        assert_eq!(display_name("whole_wheat_bread"), "Whole Wheat Bread");
        assert_eq!(food_key("Whole Wheat Bread"), "whole_wheat_bread");
        assert_eq!(food_key("  Brown RICE "), "brown_rice");
    }

    #[test]
    fn test_key_collapses_separator_runs() {
        assert_eq!(food_key("trail  mix"), "trail_mix");
        assert_eq!(food_key("trail__mix"), "trail_mix");
        assert_eq!(food_key("_trail _ mix\t"), "trail_mix");

        let key = food_key("Trail \t Mix");
        assert_eq!(food_key(&display_name(&key)), key);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Dairy".parse::<Category>().unwrap(), Category::Dairy);
        assert!("candy".parse::<Category>().is_err());
    }
}
