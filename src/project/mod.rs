//! Project approval tracking.
//!
//! A project is registered once, collects a lake and a forest authority
//! sign-off, and is then cleared for city development. Every record is
//! paired with a `(location, name)` index entry, and its full mutation
//! history can be read back from the ledger. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
