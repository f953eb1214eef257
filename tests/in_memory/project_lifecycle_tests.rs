//! Project lifecycle tests through the contract surface.

use std::sync::Arc;

use super::helpers::{contract, ledger, pending, registration};
use clearance::{
    contract::ProjectContract,
    project::{
        adapters::memory::InMemoryLedger,
        domain::{Approval, Location, ProjectName},
        services::{ApprovalWorkflowService, ErrorKind, ProjectRecordStore},
    },
};
use rstest::rstest;

#[rstest]
fn projects_at_different_locations_are_indexed_separately(
    ledger: Arc<InMemoryLedger>,
) -> Result<(), Box<dyn std::error::Error>> {
    let contract = ProjectContract::new(Arc::clone(&ledger));
    contract.try_invoke("Register", &registration("chennai", "riverside", 1))?;
    contract.try_invoke("Register", &registration("madurai", "hilltop", 2))?;

    let index = contract.store().index();
    assert!(index.index_exists(&Location::new("chennai")?, &ProjectName::new("riverside")?)?);
    assert!(index.index_exists(&Location::new("madurai")?, &ProjectName::new("hilltop")?)?);
    assert!(!index.index_exists(&Location::new("chennai")?, &ProjectName::new("hilltop")?)?);
    assert_eq!(ledger.keys()?.len(), 4);
    Ok(())
}

#[rstest]
fn full_lifecycle_through_legacy_function_names(contract: ProjectContract<InMemoryLedger>) {
    let register = contract.invoke("NocRequest", &registration("chennai", "riverside", 101));
    assert!(register.is_ok(), "{}", register.message());

    for function in ["LakeAuthRequest", "ForestAuthRequest", "BDAProjectStatus"] {
        let response = contract.invoke(function, &["riverside"]);
        assert!(response.is_ok(), "{function}: {}", response.message());
    }

    let project = contract.store().read("riverside").expect("read cleared project");
    assert!(project.approvals().authorities_granted());
    assert_eq!(project.noc_response(), Approval::Yes);
    assert_eq!(project.city_development_status(), Approval::Yes);

    assert!(contract.invoke("delete", &["riverside"]).is_ok());
    let reread = contract.try_invoke("readProject", &["riverside"]);
    assert_eq!(reread.map_err(|err| err.kind()).err(), Some(ErrorKind::NotFound));
}

#[rstest]
fn removed_name_can_be_registered_again(contract: ProjectContract<InMemoryLedger>) {
    contract
        .try_invoke("Register", &registration("chennai", "riverside", 1))
        .expect("first registration");
    contract
        .try_invoke("Remove", &["riverside"])
        .expect("remove");

    let again = contract.try_invoke("Register", &registration("madurai", "riverside", 2));

    assert!(again.is_ok());
    let project = contract.store().read("riverside").expect("read");
    assert_eq!(project.location().as_str(), "madurai");
}

#[rstest]
fn services_share_state_with_the_contract(ledger: Arc<InMemoryLedger>) {
    let store = ProjectRecordStore::new(Arc::clone(&ledger));
    store.register(pending("chennai", "riverside")).expect("register");
    let workflow = ApprovalWorkflowService::new(store.clone());
    workflow.authorize_forest("riverside").expect("authorize forest");

    let contract = ProjectContract::new(ledger);
    let response = contract.invoke("Read", &["riverside"]);
    let document: serde_json::Value =
        serde_json::from_slice(response.payload()).expect("project json");

    assert_eq!(document["pfares"], "Yes");
    assert_eq!(document["plares"], "No");
}
