use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::planner::constants::BROWSE_ALTERNATIVE_RATIO;

/// nourish: budget-aware weekly meal planning from a reference food catalog.
#[derive(Parser, Debug)]
#[command(name = "nourish")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON file overriding scoring weights and nutrition targets.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON food catalog to use instead of the built-in one.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a 7-day meal plan within a weekly budget.
    Plan(PlanArgs),

    /// Search the food catalog.
    Foods {
        /// Case-insensitive substring of the food name.
        query: Option<String>,

        /// Only list foods in this category.
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the food categories in the catalog.
    Categories,

    /// Show same-category foods at or under a cost ratio of a given food.
    Alternatives {
        /// Food to find alternatives for.
        food: String,

        /// Maximum cost per 100 units relative to the original.
        #[arg(short, long, default_value_t = BROWSE_ALTERNATIVE_RATIO)]
        ratio: f64,
    },
}

#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    /// Weekly budget. Prompted for when omitted.
    #[arg(short, long)]
    pub budget: Option<f64>,

    /// Pantry inventory JSON file.
    #[arg(short, long, default_value = "inventory.json")]
    pub inventory: PathBuf,

    /// Plan without drawing from the pantry.
    #[arg(long)]
    pub no_inventory: bool,

    /// Dietary restrictions, e.g. "vegetarian, gluten-free".
    #[arg(short, long)]
    pub restrictions: Option<String>,

    /// Dietary preferences. Recorded with the request but not scored yet.
    #[arg(short, long)]
    pub preferences: Option<String>,

    /// Write the full plan result as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the shopping list as CSV.
    #[arg(long)]
    pub shopping_csv: Option<PathBuf>,

    /// Offer to write consumed quantities back to the inventory file.
    #[arg(long)]
    pub save_inventory: bool,
}

impl Default for PlanArgs {
    fn default() -> Self {
        Self {
            budget: None,
            inventory: PathBuf::from("inventory.json"),
            no_inventory: false,
            restrictions: None,
            preferences: None,
            json: None,
            shopping_csv: None,
            save_inventory: false,
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}
