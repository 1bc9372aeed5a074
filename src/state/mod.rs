mod ledger;
mod persistence;

pub use ledger::{InventoryLedger, LedgerEntry};
pub use persistence::{load_catalog, load_inventory, save_inventory};
