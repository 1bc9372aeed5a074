use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::{food_key, FoodProfile, InventoryRecord};

/// Load inventory records from a JSON file.
///
/// Every record is validated. Records whose names normalize to the same key
/// are deduplicated, last occurrence wins, keeping file order otherwise.
pub fn load_inventory<P: AsRef<Path>>(path: P) -> Result<Vec<InventoryRecord>> {
    let content = fs::read_to_string(path)?;
    let records: Vec<InventoryRecord> = serde_json::from_str(&content)?;

    for record in &records {
        record.validate()?;
    }

    Ok(dedup_by_name(records))
}

/// Save inventory records to a JSON file.
pub fn save_inventory<P: AsRef<Path>>(path: P, records: &[InventoryRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a replacement food catalog from a JSON array of profiles.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let content = fs::read_to_string(path)?;
    let profiles: Vec<FoodProfile> = serde_json::from_str(&content)?;
    FoodCatalog::from_profiles(profiles)
}

fn dedup_by_name(records: Vec<InventoryRecord>) -> Vec<InventoryRecord> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<InventoryRecord> = Vec::with_capacity(records.len());

    for record in records {
        let key = food_key(&record.name);
        match position.get(&key) {
            Some(&i) => deduped[i] = record,
            None => {
                position.insert(key, deduped.len());
                deduped.push(record);
            }
        }
    }

    deduped
}
