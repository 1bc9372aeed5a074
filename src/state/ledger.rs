use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{food_key, InventoryRecord};

/// A pantry entry as tracked during one planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub cost: f64,
    pub category: String,
    pub expiration_date: Option<NaiveDate>,
}

/// Per-run projection of the user's pantry.
///
/// Entries are keyed by normalized name so they line up with catalog keys.
/// Quantities only ever go down, and an entry disappears once it reaches zero.
/// A ledger belongs to exactly one run; build a fresh one per request.
#[derive(Debug, Clone, Default)]
pub struct InventoryLedger {
    entries: HashMap<String, LedgerEntry>,
    /// Total consumed per record id.
    consumed: HashMap<String, f64>,
}

impl InventoryLedger {
    /// Build a ledger from caller records.
    ///
    /// Records whose names normalize to the same key collapse; the last one wins.
    pub fn from_records(records: &[InventoryRecord]) -> Self {
        let mut entries = HashMap::new();
        for record in records {
            let entry = LedgerEntry {
                id: record.id.clone(),
                name: record.name.clone(),
                quantity: record.quantity,
                cost: record.cost,
                category: record.category.as_deref().unwrap_or_default().to_lowercase(),
                expiration_date: record.expiration_date,
            };
            entries.insert(food_key(&record.name), entry);
        }
        Self {
            entries,
            consumed: HashMap::new(),
        }
    }

    /// Whether the pantry still holds `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&food_key(name))
    }

    pub fn entry(&self, name: &str) -> Option<&LedgerEntry> {
        self.entries.get(&food_key(name))
    }

    /// Remaining quantity for `name`, if it is still stocked.
    pub fn remaining(&self, name: &str) -> Option<f64> {
        self.entry(name).map(|e| e.quantity)
    }

    /// Take `amount` from the entry for `name`.
    ///
    /// The entry is removed once nothing is left. Returns the quantity that
    /// remains (0 when removed), or `None` when `name` is not stocked.
    pub fn consume(&mut self, name: &str, amount: f64) -> Option<f64> {
        let key = food_key(name);
        let entry = self.entries.get_mut(&key)?;

        let amount = amount.max(0.0);
        let taken = amount.min(entry.quantity);
        entry.quantity -= amount;
        let remaining = entry.quantity;
        let id = entry.id.clone();
        *self.consumed.entry(id.clone()).or_insert(0.0) += taken;

        if remaining <= 0.0 {
            debug!(food = %key, id = %id, "inventory entry depleted");
            self.entries.remove(&key);
            return Some(0.0);
        }
        Some(remaining)
    }

    /// Total quantity taken from each record so far, keyed by record id.
    pub fn consumed(&self) -> &HashMap<String, f64> {
        &self.consumed
    }

    /// Apply this run's consumption to the caller's records.
    ///
    /// Records are matched by id, which [`PlanRequest::new`] keeps unique.
    /// Quantities are floored at zero; records that were not touched pass
    /// through unchanged.
    ///
    /// [`PlanRequest::new`]: crate::planner::PlanRequest::new
    pub fn reconcile(&self, records: &[InventoryRecord]) -> Vec<InventoryRecord> {
        records
            .iter()
            .map(|record| {
                let mut updated = record.clone();
                if let Some(used) = self.consumed.get(&record.id) {
                    updated.quantity = (record.quantity - used).max(0.0);
                }
                updated
            })
            .collect()
    }

    /// Number of entries still stocked.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
