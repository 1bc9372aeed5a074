use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{MealPlanResult, ShoppingListEntry};

/// Write the full plan result as pretty JSON.
pub fn write_plan_json(result: &MealPlanResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the shopping list to a CSV file.
pub fn write_shopping_csv(list: &[ShoppingListEntry], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["category", "item", "quantity", "unit", "estimated_cost"])?;
    for entry in list {
        wtr.write_record([
            entry.category.clone(),
            entry.item.clone(),
            format!("{:.1}", entry.quantity),
            entry.unit.clone(),
            format!("{:.2}", entry.estimated_cost),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_shopping_csv_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shopping.csv");
        let list = vec![ShoppingListEntry {
            item: "Brown Rice".to_string(),
            quantity: 525.0,
            unit: "g".to_string(),
            estimated_cost: 36.75,
            category: "grain".to_string(),
        }];

        write_shopping_csv(&list, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("category,item,quantity,unit,estimated_cost"));
        assert_eq!(lines.next(), Some("grain,Brown Rice,525.0,g,36.75"));
    }
}
