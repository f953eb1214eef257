//! Application services for project approval tracking.

mod approval;
mod error;
mod history;
mod index;
mod record_store;

pub use approval::ApprovalWorkflowService;
pub use error::{ErrorKind, ProjectServiceError, ProjectServiceResult};
pub use history::{ProjectHistory, ProjectHistoryReader};
pub use index::{DEFAULT_INDEX_NAMESPACE, ProjectIndexManager};
pub use record_store::{ProjectRecordStore, RegisterProjectRequest};
