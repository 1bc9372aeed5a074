mod alternatives;
mod nutrition;
mod shopping;
mod usage;

pub use alternatives::suggest_alternatives;
pub use nutrition::{analyze_nutrition, nutrition_score};
pub use shopping::build_shopping_list;
pub use usage::summarize_inventory_usage;

/// Round to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
