pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_plan_json, write_shopping_csv};
pub use prompts::{prompt_budget, prompt_restrictions, prompt_yes_no};
pub use render::{display_alternatives, display_food_list, display_meal_plan};
