//! In-memory adapters for project approval tracking.

mod ledger;

pub use ledger::InMemoryLedger;
