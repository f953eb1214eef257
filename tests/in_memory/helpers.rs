//! Shared test helpers for in-memory ledger integration tests.

use std::sync::Arc;

use clearance::{
    contract::ProjectContract,
    project::{adapters::memory::InMemoryLedger, services::RegisterProjectRequest},
};
use rstest::fixture;

/// Provides a fresh ledger for each test.
#[fixture]
pub fn ledger() -> Arc<InMemoryLedger> {
    Arc::new(InMemoryLedger::new())
}

/// Provides a contract over a fresh ledger.
#[fixture]
pub fn contract(ledger: Arc<InMemoryLedger>) -> ProjectContract<InMemoryLedger> {
    ProjectContract::new(ledger)
}

/// Registration arguments for a pending project.
pub fn registration(location: &str, name: &str, id: u64) -> Vec<String> {
    vec![
        location.to_owned(),
        name.to_owned(),
        id.to_string(),
        "7".to_owned(),
        "No".to_owned(),
        "No".to_owned(),
        "No".to_owned(),
        "No".to_owned(),
    ]
}

/// Registration request for a pending project.
pub fn pending(location: &str, name: &str) -> RegisterProjectRequest {
    RegisterProjectRequest::pending(location, name, "1", "7")
}
