//! Domain model for project approval tracking.
//!
//! The project domain models the record, its approval flags and its
//! version history while keeping all ledger concerns outside of the domain
//! boundary.

mod approval;
mod error;
mod history;
mod ids;
mod project;

pub use approval::{Approval, Authority};
pub use error::{ParseApprovalError, ProjectCodecError, ProjectDomainError};
pub use history::{HistoryEntry, HistoryRecord};
pub use ids::{Location, ProjectId, ProjectName, SurveyNumber};
pub use project::{ApprovalState, PROJECT_DOC_TYPE, Project, parse_approval};
