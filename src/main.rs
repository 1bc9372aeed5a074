use clap::Parser;
use tracing_subscriber::EnvFilter;

use nourish_planner::cli::{Cli, Command, PlanArgs};
use nourish_planner::config::{load_config, PlannerConfig};
use nourish_planner::error::Result;
use nourish_planner::interface::{
    display_alternatives, display_food_list, display_meal_plan, prompt_budget,
    prompt_restrictions, prompt_yes_no, write_plan_json, write_shopping_csv,
};
use nourish_planner::models::Category;
use nourish_planner::planner::{PlanRequest, WeeklyPlanner};
use nourish_planner::state::{load_catalog, load_inventory, save_inventory, InventoryLedger};
use nourish_planner::FoodCatalog;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => FoodCatalog::builtin(),
    };
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PlannerConfig::default(),
    };

    match cli.command.unwrap_or_default() {
        Command::Plan(args) => cmd_plan(&catalog, &config, args),
        Command::Foods { query, category } => cmd_foods(&catalog, query, category),
        Command::Categories => cmd_categories(&catalog),
        Command::Alternatives { food, ratio } => cmd_alternatives(&catalog, &food, ratio),
    }
}

/// Generate and display a weekly plan.
fn cmd_plan(catalog: &FoodCatalog, config: &PlannerConfig, args: PlanArgs) -> Result<()> {
    let budget = match args.budget {
        Some(b) => b,
        None => prompt_budget()?,
    };
    // Interactive sessions are asked for restrictions too.
    let restrictions = match args.restrictions {
        None if args.budget.is_none() => prompt_restrictions()?,
        given => given,
    };

    let inventory = if args.no_inventory || !args.inventory.exists() {
        Vec::new()
    } else {
        let records = load_inventory(&args.inventory)?;
        println!(
            "Loaded {} inventory items from {}",
            records.len(),
            args.inventory.display()
        );
        records
    };

    let request = PlanRequest::new(budget, inventory, restrictions, args.preferences)?;
    let mut ledger = InventoryLedger::from_records(&request.inventory);

    let result = WeeklyPlanner::new(catalog, config).optimize_with_ledger(&request, &mut ledger);

    display_meal_plan(&result);

    if let Some(path) = &args.json {
        write_plan_json(&result, path)?;
        println!("Plan written to {}", path.display());
    }
    if let Some(path) = &args.shopping_csv {
        write_shopping_csv(&result.shopping_list, path)?;
        println!("Shopping list written to {}", path.display());
    }

    if args.save_inventory
        && result.inventory_usage.meals_from_inventory > 0
        && prompt_yes_no("Write consumed quantities back to the inventory file?", true)?
    {
        let updated = ledger.reconcile(&request.inventory);
        save_inventory(&args.inventory, &updated)?;
        println!("Inventory saved.");
    }

    Ok(())
}

/// Search the catalog by name and category.
fn cmd_foods(catalog: &FoodCatalog, query: Option<String>, category: Option<String>) -> Result<()> {
    let category = category.map(|c| c.parse::<Category>()).transpose()?;
    let foods = catalog.search(query.as_deref().unwrap_or_default(), category);

    let title = match &query {
        Some(q) => format!("Foods matching '{}'", q),
        None => "Foods".to_string(),
    };
    display_food_list(&foods, &title);
    Ok(())
}

/// List catalog categories.
fn cmd_categories(catalog: &FoodCatalog) -> Result<()> {
    for category in catalog.categories() {
        println!("{}", category);
    }
    Ok(())
}

/// Show cheaper or similar-cost foods in the same category.
fn cmd_alternatives(catalog: &FoodCatalog, food: &str, ratio: f64) -> Result<()> {
    let original = catalog.require(food)?;
    let alternatives: Vec<_> = catalog
        .find_alternatives(&original.name, ratio)
        .into_iter()
        .filter_map(|name| catalog.get(name))
        .collect();

    display_alternatives(original, &alternatives);
    Ok(())
}
