use crate::models::{FoodProfile, MealPlanResult, MealType};

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn day_name(day: u8) -> &'static str {
    DAY_NAMES.get(day as usize).copied().unwrap_or("Day ?")
}

/// Display a weekly plan and its reports.
pub fn display_meal_plan(result: &MealPlanResult) {
    if result.meal_plan_items.is_empty() {
        println!("No meal plan generated (no compatible foods for these restrictions).");
        return;
    }

    println!();
    println!("=== Weekly Meal Plan ===");

    let width = result
        .meal_plan_items
        .iter()
        .map(|i| i.food_name.len())
        .max()
        .unwrap_or(10);

    for day in 0..DAY_NAMES.len() as u8 {
        let day_items: Vec<_> = result
            .meal_plan_items
            .iter()
            .filter(|i| i.day_of_week == day)
            .collect();
        if day_items.is_empty() {
            continue;
        }

        println!();
        println!("--- {} ---", day_name(day));
        for meal_type in MealType::ALL {
            for item in day_items.iter().filter(|i| i.meal_type == meal_type) {
                let source = if item.uses_inventory { "  [pantry]" } else { "" };
                println!(
                    "  {:<9} {:<width$} {:>6.0} {:<2} {:>4.0} cal  ${:>6.2}{}",
                    meal_type.as_str(),
                    item.food_name,
                    item.quantity,
                    item.unit,
                    item.calories,
                    item.estimated_cost,
                    source,
                    width = width
                );
                if let Some(note) = &item.notes {
                    println!("            {}", note);
                }
            }
        }
    }

    if !result.shopping_list.is_empty() {
        println!();
        println!("=== Shopping List ===");
        println!();
        for entry in &result.shopping_list {
            println!(
                "  {:<10} {:<width$} {:>8.1} {:<2}  ${:>7.2}",
                entry.category,
                entry.item,
                entry.quantity,
                entry.unit,
                entry.estimated_cost,
                width = width
            );
        }
    }

    let analysis = &result.nutrition_analysis;
    println!();
    println!("=== Nutrition (weekly daily average) ===");
    println!();
    for (nutrient, check) in &analysis.weekly_validation {
        let status = if check.within_range {
            "ok"
        } else if check.meets_min {
            "high"
        } else {
            "low"
        };
        println!(
            "  {:<9} {:>8.1}  (target {:.0}-{:.0}, {:>5.1}% of optimal)  {}",
            nutrient.as_str(),
            check.actual,
            check.min,
            check.max,
            check.percentage_of_optimal,
            status
        );
    }
    println!("  Nutrition score: {}/100", analysis.overall_score);

    if !result.alternatives.is_empty() {
        println!();
        println!("=== Cheaper Alternatives ===");
        println!();
        for group in &result.alternatives {
            let names: Vec<String> = group
                .alternatives
                .iter()
                .map(|a| format!("{} (save ${:.2})", a.name, a.estimated_savings))
                .collect();
            println!("  {} -> {}", group.original_item, names.join(", "));
        }
    }

    let usage = &result.inventory_usage;
    println!();
    println!("--- Summary ---");
    println!("Total items: {}", result.meal_plan_items.len());
    println!("Total cost: ${:.2} of ${:.2}", result.total_cost, result.budget);
    println!("Budget remaining: ${:.2}", result.budget_remaining);
    println!("Budget utilization: {:.1}%", result.budget_utilization);
    println!(
        "From inventory: {}/{} ({:.1}%), saved ${:.2}",
        usage.meals_from_inventory,
        usage.total_meals,
        usage.inventory_usage_percentage,
        usage.estimated_cost_saved
    );
    println!("{}", usage.waste_reduction);
    println!();
}

/// Display catalog foods with their per-100 values.
pub fn display_food_list(foods: &[&FoodProfile], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {} [{}] - ${:.2}/100{}, {} cal, P:{} C:{} F:{} Fib:{}, serving {}{}",
            food.display_name(),
            food.category,
            food.cost_per_100,
            food.unit,
            food.calories,
            food.protein,
            food.carbs,
            food.fats,
            food.fiber,
            food.serving_size,
            food.unit
        );
    }

    println!();
}

/// Display the same-category alternatives found for one food.
pub fn display_alternatives(food: &FoodProfile, alternatives: &[&FoodProfile]) {
    let title = format!(
        "Alternatives to {} (${:.2}/100{})",
        food.display_name(),
        food.cost_per_100,
        food.unit
    );
    display_food_list(alternatives, &title);
}
