pub mod budget;
pub mod constants;
pub mod dietary;
pub mod policy;
pub mod scoring;
pub mod selector;
pub mod weekly;

pub use budget::BudgetState;
pub use dietary::{is_compatible, DietaryFilter};
pub use policy::NutritionPolicy;
pub use scoring::{score_breakdown, score_candidate, CandidateScore, ScoringWeights};
pub use selector::MealSelector;
pub use weekly::{PlanRequest, WeeklyPlanner};
