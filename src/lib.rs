//! Clearance: multi-authority approval tracking for development projects.
//!
//! A project is registered once, then collects sign-offs from the lake and
//! forest authorities before it is cleared for city development. Every
//! record lives in a key-value ledger that keeps the full version history
//! of each key.
//!
//! # Architecture
//!
//! Clearance follows hexagonal architecture principles:
//!
//! - **Domain**: Project records, approvals, and history entries
//! - **Ports**: The [`project::ports::Ledger`] trait over world state
//! - **Adapters**: An in-memory ledger for local use and tests
//! - **Services**: Record storage, indexing, approval, and history reading
//!
//! # Modules
//!
//! - [`project`]: Project records and the services that operate on them
//! - [`contract`]: Named operations dispatched onto the project services

pub mod contract;
pub mod project;
