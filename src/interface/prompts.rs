use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};

/// Restriction presets offered by [`prompt_restrictions`].
const RESTRICTION_CHOICES: [&str; 6] = [
    "none",
    "vegetarian",
    "vegan",
    "gluten-free",
    "dairy-free",
    "other (type it)",
];

/// Prompt for the weekly food budget.
pub fn prompt_budget() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("What is your weekly food budget?")
        .default("100".to_string())
        .interact_text()?;

    let budget: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))?;

    if !budget.is_finite() || budget < 0.0 {
        return Err(PlannerError::InvalidInput(
            "Budget must be zero or more".to_string(),
        ));
    }

    Ok(budget)
}

/// Prompt for dietary restrictions. `None` means no restriction.
pub fn prompt_restrictions() -> Result<Option<String>> {
    let selection = Select::new()
        .with_prompt("Any dietary restrictions?")
        .items(&RESTRICTION_CHOICES)
        .default(0)
        .interact()?;

    match selection {
        0 => Ok(None),
        i if i + 1 < RESTRICTION_CHOICES.len() => Ok(Some(RESTRICTION_CHOICES[i].to_string())),
        _ => {
            let text: String = Input::new()
                .with_prompt("Describe your restrictions")
                .allow_empty(true)
                .interact_text()?;
            let text = text.trim();
            Ok((!text.is_empty()).then(|| text.to_string()))
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
