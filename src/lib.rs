pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod reports;
pub mod state;

pub use catalog::FoodCatalog;
pub use error::{PlannerError, Result};
pub use models::{FoodProfile, InventoryRecord, MealPlanResult, SelectedMealItem};
pub use planner::{PlanRequest, WeeklyPlanner};
