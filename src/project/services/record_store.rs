//! Record store: create, read and remove project records.

use std::sync::Arc;

use tracing::info;

use crate::project::{
    domain::{
        ApprovalState, Location, Project, ProjectId, ProjectName, SurveyNumber, parse_approval,
    },
    ports::Ledger,
};

use super::{ProjectIndexManager, ProjectServiceError, ProjectServiceResult};

/// Request payload for registering a new project.
///
/// All values arrive as raw caller strings and are validated by
/// [`ProjectRecordStore::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterProjectRequest {
    location: String,
    name: String,
    id: String,
    survey_number: String,
    noc_response: String,
    lake_auth_response: String,
    forest_auth_response: String,
    city_development_status: String,
}

impl RegisterProjectRequest {
    /// Creates a request from the eight registration fields.
    #[expect(
        clippy::too_many_arguments,
        reason = "registration carries every field of the project record"
    )]
    #[must_use]
    pub fn new(
        location: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<String>,
        survey_number: impl Into<String>,
        noc_response: impl Into<String>,
        lake_auth_response: impl Into<String>,
        forest_auth_response: impl Into<String>,
        city_development_status: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            name: name.into(),
            id: id.into(),
            survey_number: survey_number.into(),
            noc_response: noc_response.into(),
            lake_auth_response: lake_auth_response.into(),
            forest_auth_response: forest_auth_response.into(),
            city_development_status: city_development_status.into(),
        }
    }

    /// Creates a request with every approval set to `No`.
    #[must_use]
    pub fn pending(
        location: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<String>,
        survey_number: impl Into<String>,
    ) -> Self {
        Self::new(location, name, id, survey_number, "No", "No", "No", "No")
    }

    /// Validates the request into a project.
    fn into_project(self) -> ProjectServiceResult<Project> {
        let location = Location::new(self.location)?;
        let name = ProjectName::new(self.name)?;
        let id = ProjectId::parse(&self.id)?;
        let survey_number = SurveyNumber::parse(&self.survey_number)?;
        let approvals = ApprovalState {
            noc_response: parse_approval("NOC response", &self.noc_response)?,
            lake_auth_response: parse_approval("lake authority response", &self.lake_auth_response)?,
            forest_auth_response: parse_approval(
                "forest authority response",
                &self.forest_auth_response,
            )?,
            city_development_status: parse_approval(
                "city development status",
                &self.city_development_status,
            )?,
        };
        Ok(Project::new(location, name, id, survey_number, approvals))
    }
}

/// CRUD over project records, keeping the location index paired.
pub struct ProjectRecordStore<L>
where
    L: Ledger,
{
    ledger: Arc<L>,
    index: ProjectIndexManager<L>,
}

impl<L> Clone for ProjectRecordStore<L>
where
    L: Ledger,
{
    fn clone(&self) -> Self {
        Self {
            ledger: Arc::clone(&self.ledger),
            index: self.index.clone(),
        }
    }
}

impl<L> ProjectRecordStore<L>
where
    L: Ledger,
{
    /// Creates a record store with the default index namespace.
    #[must_use]
    pub fn new(ledger: Arc<L>) -> Self {
        let index = ProjectIndexManager::new(Arc::clone(&ledger));
        Self { ledger, index }
    }

    /// Creates a record store that maintains the given index.
    #[must_use]
    pub const fn with_index(ledger: Arc<L>, index: ProjectIndexManager<L>) -> Self {
        Self { ledger, index }
    }

    /// Returns the index manager paired with this store.
    #[must_use]
    pub const fn index(&self) -> &ProjectIndexManager<L> {
        &self.index
    }

    /// Registers a new project and its index entry.
    ///
    /// The index key is built before anything is written, so a name or
    /// location the index cannot hold leaves the ledger untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Validation`] for malformed input,
    /// [`ProjectServiceError::AlreadyExists`] when the name is taken, or
    /// [`ProjectServiceError::Store`] when a ledger call fails.
    pub fn register(&self, request: RegisterProjectRequest) -> ProjectServiceResult<Project> {
        let project = request.into_project()?;
        info!(project = %project.name(), location = %project.location(), "registering project");

        if self.ledger.get_state(project.name().as_str())?.is_some() {
            return Err(ProjectServiceError::AlreadyExists(project.name().clone()));
        }
        let index_key = self.index.index_key(project.location(), project.name())?;

        self.write(project.name(), &project)?;
        self.index.create_index_at(&index_key, project.name())?;

        info!(project = %project.name(), "project registered");
        Ok(project)
    }

    /// Reads a project by name.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when absent,
    /// [`ProjectServiceError::Decode`] when the stored bytes do not parse,
    /// or [`ProjectServiceError::Validation`] for an invalid name.
    pub fn read(&self, name: &str) -> ProjectServiceResult<Project> {
        let project_name = ProjectName::new(name)?;
        self.fetch(&project_name)
    }

    /// Looks up a project, returning `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Decode`] when the stored bytes do not
    /// parse or [`ProjectServiceError::Store`] when the read fails.
    pub fn find(&self, name: &ProjectName) -> ProjectServiceResult<Option<Project>> {
        let Some(bytes) = self.ledger.get_state(name.as_str())? else {
            return Ok(None);
        };
        Project::decode(&bytes)
            .map(Some)
            .map_err(|source| ProjectServiceError::Decode {
                name: name.clone(),
                source,
            })
    }

    /// Removes a project and its index entry.
    ///
    /// The record is deleted under the caller's key. The index key is
    /// rebuilt from the stored record. Returns the removed project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when absent,
    /// [`ProjectServiceError::Decode`] when the stored bytes do not parse,
    /// or [`ProjectServiceError::Store`] when a ledger call fails.
    pub fn remove(&self, name: &str) -> ProjectServiceResult<Project> {
        let key = ProjectName::new(name)?;
        let project = self.fetch(&key)?;
        info!(project = %key, "removing project");

        self.ledger.delete_state(key.as_str())?;
        self.index.delete_index(project.location(), project.name())?;

        info!(project = %key, "project removed");
        Ok(project)
    }

    /// Reads a project under `key`, failing when it is absent.
    pub(crate) fn fetch(&self, key: &ProjectName) -> ProjectServiceResult<Project> {
        self.find(key)?
            .ok_or_else(|| ProjectServiceError::NotFound(key.clone()))
    }

    /// Writes changes to an existing project back under `key`.
    ///
    /// The index is untouched because location and name never change.
    pub(crate) fn update(&self, key: &ProjectName, project: &Project) -> ProjectServiceResult<()> {
        self.write(key, project)
    }

    fn write(&self, key: &ProjectName, project: &Project) -> ProjectServiceResult<()> {
        let bytes = project
            .encode()
            .map_err(|source| ProjectServiceError::Decode {
                name: key.clone(),
                source,
            })?;
        self.ledger.put_state(key.as_str(), &bytes)?;
        Ok(())
    }
}
