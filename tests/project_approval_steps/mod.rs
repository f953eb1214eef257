//! Step definitions for project approval BDD scenarios.

pub mod then;
pub mod world;
