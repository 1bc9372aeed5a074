use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PlannerError, Result};

/// A pantry item owned by the user, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: String,
    pub name: String,
    /// Remaining quantity, in the caller's raw units.
    pub quantity: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub category: Option<String>,
    /// Accepts a plain date or a date-time; only the date is kept.
    #[serde(default, alias = "expirationDate", deserialize_with = "lenient_date")]
    pub expiration_date: Option<NaiveDate>,
}

/// Parse `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM:SS[.f]`, or RFC 3339.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
                .map(|dt| dt.date())
                .ok()
        })
        .or_else(|| DateTime::parse_from_rfc3339(text).map(|dt| dt.date_naive()).ok())
}

fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_date(&text)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid expiration date '{}'", text)))
}

impl InventoryRecord {
    /// Build a record, rejecting values the planner cannot work with.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: f64,
        cost: f64,
        category: Option<String>,
        expiration_date: Option<NaiveDate>,
    ) -> Result<Self> {
        let record = Self {
            id: id.into(),
            name: name.into(),
            quantity,
            cost,
            category,
            expiration_date,
        };
        record.validate()?;
        Ok(record)
    }

    /// Boundary check for records that arrive through deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::InvalidInput(format!(
                "inventory record '{}' has no name",
                self.id
            )));
        }
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "inventory record '{}' has invalid quantity {}",
                self.name, self.quantity
            )));
        }
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "inventory record '{}' has invalid cost {}",
                self.name, self.cost
            )));
        }
        Ok(())
    }
}
