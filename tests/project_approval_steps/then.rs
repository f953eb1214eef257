//! Then steps for project approval BDD scenarios.

use super::world::ProjectWorld;
use clearance::{
    contract::ContractError,
    project::{
        domain::{Approval, Project},
        services::ErrorKind,
    },
};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use serde_json::Value;

fn read_project(world: &ProjectWorld, name: &str) -> Result<Project, eyre::Report> {
    world
        .contract
        .store()
        .read(name)
        .wrap_err_with(|| format!("read project {name}"))
}

fn parse_approval(raw: &str) -> Result<Approval, eyre::Report> {
    Approval::try_from(raw).map_err(|err| eyre::eyre!("invalid approval in scenario: {err}"))
}

fn expect_kind(world: &ProjectWorld, expected: ErrorKind) -> Result<(), eyre::Report> {
    match world.last_result()? {
        Err(err) if err.kind() == expected => Ok(()),
        other => Err(eyre::eyre!("expected {expected:?} error, got {other:?}")),
    }
}

#[then("the operation succeeds")]
fn operation_succeeds(world: &ProjectWorld) -> Result<(), eyre::Report> {
    match world.last_result()? {
        Ok(_) => Ok(()),
        Err(err) => Err(eyre::eyre!("expected success, got {err}")),
    }
}

#[then("the operation fails with an already exists error")]
fn fails_already_exists(world: &ProjectWorld) -> Result<(), eyre::Report> {
    expect_kind(world, ErrorKind::AlreadyExists)
}

#[then("the operation fails with a validation error")]
fn fails_validation(world: &ProjectWorld) -> Result<(), eyre::Report> {
    expect_kind(world, ErrorKind::Validation)
}

#[then(r#"the operation fails with message "{message}""#)]
fn fails_with_message(world: &ProjectWorld, message: String) -> Result<(), eyre::Report> {
    match world.last_result()? {
        Err(err) if matches!(err, ContractError::UnknownFunction(_)) && err.to_string() == message => {
            Ok(())
        }
        other => Err(eyre::eyre!("expected failure {message:?}, got {other:?}")),
    }
}

#[then(r#"the project "{name}" has lake approval "{approval}""#)]
fn lake_approval_is(
    world: &ProjectWorld,
    name: String,
    approval: String,
) -> Result<(), eyre::Report> {
    let expected = parse_approval(&approval)?;
    let project = read_project(world, &name)?;
    if project.lake_auth_response() != expected {
        return Err(eyre::eyre!(
            "expected lake approval {expected}, found {}",
            project.lake_auth_response()
        ));
    }
    Ok(())
}

#[then(r#"the project "{name}" has forest approval "{approval}""#)]
fn forest_approval_is(
    world: &ProjectWorld,
    name: String,
    approval: String,
) -> Result<(), eyre::Report> {
    let expected = parse_approval(&approval)?;
    let project = read_project(world, &name)?;
    if project.forest_auth_response() != expected {
        return Err(eyre::eyre!(
            "expected forest approval {expected}, found {}",
            project.forest_auth_response()
        ));
    }
    Ok(())
}

#[then(r#"the project "{name}" has every approval granted"#)]
fn every_approval_granted(world: &ProjectWorld, name: String) -> Result<(), eyre::Report> {
    let project = read_project(world, &name)?;
    let approvals = project.approvals();
    if !approvals.authorities_granted() || !project.city_development_status().is_granted() {
        return Err(eyre::eyre!("expected every approval granted, got {approvals:?}"));
    }
    if !project.noc_response().is_granted() {
        return Err(eyre::eyre!("expected NOC to be granted, got {approvals:?}"));
    }
    Ok(())
}

#[then(r#"reading "{name}" fails with a not found error"#)]
fn read_not_found(world: &ProjectWorld, name: String) -> Result<(), eyre::Report> {
    match world.contract.try_invoke("Read", &[name]) {
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        other => Err(eyre::eyre!("expected NotFound, got {other:?}")),
    }
}

#[then(r#"the history of "{name}" has {count:usize} entries ending with a delete"#)]
fn history_ends_with_delete(
    world: &ProjectWorld,
    name: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let payload = world
        .contract
        .try_invoke("History", &[name])
        .wrap_err("read project history")?;
    let history: Value = serde_json::from_slice(&payload).wrap_err("parse history json")?;
    let entries = history
        .as_array()
        .ok_or_else(|| eyre::eyre!("history payload is not an array"))?;
    if entries.len() != count {
        return Err(eyre::eyre!(
            "expected {count} history entries, found {}",
            entries.len()
        ));
    }
    let last = entries
        .last()
        .ok_or_else(|| eyre::eyre!("history is empty"))?;
    if last["IsDelete"] != "true" {
        return Err(eyre::eyre!("expected final entry to be a delete, got {last}"));
    }
    Ok(())
}

#[then("every invocation succeeded")]
fn every_invocation_succeeded(world: &ProjectWorld) -> Result<(), eyre::Report> {
    if world.failures.is_empty() {
        return Ok(());
    }
    Err(eyre::eyre!("invocations failed: {:?}", world.failures))
}

#[then(
    r#"reading "{name}" returns location "{location}", id {id:u64}, survey number {survey:u64} and every approval "{approval}""#
)]
fn read_returns_fields(
    world: &ProjectWorld,
    name: String,
    location: String,
    id: u64,
    survey: u64,
    approval: String,
) -> Result<(), eyre::Report> {
    let payload = world
        .contract
        .try_invoke("Read", &[name.as_str()])
        .wrap_err_with(|| format!("read project {name}"))?;
    let document: Value = serde_json::from_slice(&payload).wrap_err("parse project json")?;

    let expected = [
        ("plocation", Value::from(location)),
        ("pname", Value::from(name)),
        ("pid", Value::from(id)),
        ("psnum", Value::from(survey)),
        ("pnres", Value::from(approval.as_str())),
        ("plares", Value::from(approval.as_str())),
        ("pfares", Value::from(approval.as_str())),
        ("pcdstat", Value::from(approval.as_str())),
    ];
    for (field, value) in expected {
        if document.get(field) != Some(&value) {
            return Err(eyre::eyre!(
                "expected {field} = {value}, got {:?} in {document}",
                document.get(field)
            ));
        }
    }
    Ok(())
}
