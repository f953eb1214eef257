//! History reporting across a project's lifetime.

use std::sync::Arc;

use super::helpers::{ledger, registration};
use clearance::{
    contract::ProjectContract,
    project::{
        adapters::memory::InMemoryLedger,
        domain::Approval,
        services::ProjectHistoryReader,
    },
};
use rstest::rstest;
use serde_json::Value;

#[rstest]
fn history_outlives_removal_and_reregistration(ledger: Arc<InMemoryLedger>) {
    let contract = ProjectContract::new(Arc::clone(&ledger));
    contract
        .try_invoke("Register", &registration("chennai", "riverside", 1))
        .expect("register");
    contract.try_invoke("Remove", &["riverside"]).expect("remove");
    contract
        .try_invoke("Register", &registration("madurai", "riverside", 2))
        .expect("register again");

    let payload = contract
        .try_invoke("History", &["riverside"])
        .expect("history");
    let history: Value = serde_json::from_slice(&payload).expect("history json");
    let entries = history.as_array().expect("json array");

    let flags: Vec<_> = entries.iter().map(|entry| entry["IsDelete"].clone()).collect();
    assert_eq!(flags, vec!["false", "true", "false"]);
    assert_eq!(entries[0]["Value"]["plocation"], "chennai");
    assert_eq!(entries[2]["Value"]["plocation"], "madurai");
    assert_eq!(ledger.open_history_cursors(), 0);
}

#[rstest]
fn history_entries_decode_to_projects(ledger: Arc<InMemoryLedger>) {
    let contract = ProjectContract::new(Arc::clone(&ledger));
    contract
        .try_invoke("Register", &registration("chennai", "riverside", 1))
        .expect("register");
    contract
        .try_invoke("AuthorizeLake", &["riverside"])
        .expect("authorize lake");

    let entries: Vec<_> = ProjectHistoryReader::new(Arc::clone(&ledger))
        .history("riverside")
        .expect("open history")
        .collect::<Result<_, _>>()
        .expect("read history");
    let versions: Vec<_> = entries
        .iter()
        .filter_map(|entry| entry.project())
        .collect::<Result<_, _>>()
        .expect("decode versions");

    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].lake_auth_response(), Approval::No);
    assert_eq!(versions[1].lake_auth_response(), Approval::Yes);
    assert_eq!(ledger.open_history_cursors(), 0);
}

#[rstest]
fn history_records_carry_distinct_transaction_ids(ledger: Arc<InMemoryLedger>) {
    let contract = ProjectContract::new(Arc::clone(&ledger));
    contract
        .try_invoke("Register", &registration("chennai", "riverside", 1))
        .expect("register");
    contract
        .try_invoke("AggregateStatus", &["riverside"])
        .expect("aggregate status");

    let records = ProjectHistoryReader::new(ledger)
        .history("riverside")
        .expect("open history")
        .into_records()
        .expect("records");

    let mut ids: Vec<_> = records.iter().map(|record| record.tx_id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), records.len());
    assert_eq!(records.len(), 4);
}
