//! Project aggregate root and its persisted document format.

use super::{
    Approval, Location, ProjectCodecError, ProjectDomainError, ProjectId, ProjectName,
    SurveyNumber,
};
use serde::{Deserialize, Serialize};

/// Object type tag written into every stored project document.
pub const PROJECT_DOC_TYPE: &str = "project";

/// The four approval flags carried by a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApprovalState {
    /// No Objection Certificate response.
    pub noc_response: Approval,
    /// Lake authority response.
    pub lake_auth_response: Approval,
    /// Forest authority response.
    pub forest_auth_response: Approval,
    /// City development clearance.
    pub city_development_status: Approval,
}

impl ApprovalState {
    /// Returns `true` when both authorities have signed off.
    #[must_use]
    pub const fn authorities_granted(&self) -> bool {
        self.lake_auth_response.is_granted() && self.forest_auth_response.is_granted()
    }
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    location: Location,
    name: ProjectName,
    id: ProjectId,
    survey_number: SurveyNumber,
    approvals: ApprovalState,
}

impl Project {
    /// Creates a project from validated parts.
    #[must_use]
    pub const fn new(
        location: Location,
        name: ProjectName,
        id: ProjectId,
        survey_number: SurveyNumber,
        approvals: ApprovalState,
    ) -> Self {
        Self {
            location,
            name,
            id,
            survey_number,
            approvals,
        }
    }

    /// Returns the project location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the caller-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the survey number.
    #[must_use]
    pub const fn survey_number(&self) -> SurveyNumber {
        self.survey_number
    }

    /// Returns all approval flags.
    #[must_use]
    pub const fn approvals(&self) -> &ApprovalState {
        &self.approvals
    }

    /// Returns the NOC response.
    #[must_use]
    pub const fn noc_response(&self) -> Approval {
        self.approvals.noc_response
    }

    /// Returns the lake authority response.
    #[must_use]
    pub const fn lake_auth_response(&self) -> Approval {
        self.approvals.lake_auth_response
    }

    /// Returns the forest authority response.
    #[must_use]
    pub const fn forest_auth_response(&self) -> Approval {
        self.approvals.forest_auth_response
    }

    /// Returns the city development status.
    #[must_use]
    pub const fn city_development_status(&self) -> Approval {
        self.approvals.city_development_status
    }

    /// Records the lake authority sign-off.
    pub const fn grant_lake_approval(&mut self) {
        self.approvals.lake_auth_response = Approval::Yes;
    }

    /// Records the forest authority sign-off.
    pub const fn grant_forest_approval(&mut self) {
        self.approvals.forest_auth_response = Approval::Yes;
    }

    /// Issues the NOC and marks the project cleared for city development.
    pub const fn grant_city_clearance(&mut self) {
        self.approvals.noc_response = Approval::Yes;
        self.approvals.city_development_status = Approval::Yes;
    }

    /// Serializes the project into its stored document form.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCodecError::Encode`] if serialization fails.
    pub fn encode(&self) -> Result<Vec<u8>, ProjectCodecError> {
        serde_json::to_vec(&ProjectDocument::from(self))
            .map_err(|err| ProjectCodecError::Encode(err.to_string()))
    }

    /// Parses a project from stored document bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCodecError`] when the bytes are not a project
    /// document or hold invalid field values.
    pub fn decode(bytes: &[u8]) -> Result<Self, ProjectCodecError> {
        let document: ProjectDocument = serde_json::from_slice(bytes)
            .map_err(|err| ProjectCodecError::Malformed(err.to_string()))?;
        Self::try_from(document)
    }
}

/// Stored JSON document for a project.
///
/// Aliases accept documents written with the long field names used by
/// earlier deployments of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ProjectDocument {
    #[serde(rename = "docType", default, skip_serializing_if = "Option::is_none")]
    doc_type: Option<String>,
    #[serde(rename = "plocation", alias = "ProjectLocation")]
    location: String,
    #[serde(rename = "pname", alias = "ProjectName")]
    name: String,
    #[serde(rename = "pid", alias = "ProjectId")]
    id: u64,
    #[serde(rename = "psnum", alias = "ProjectSurveyNumber")]
    survey_number: u64,
    #[serde(rename = "pnres", alias = "ProjectNocResponse")]
    noc_response: Approval,
    #[serde(rename = "plares", alias = "ProjectLakeAuthResponse")]
    lake_auth_response: Approval,
    #[serde(rename = "pfares", alias = "ProjectForestAuthResponse")]
    forest_auth_response: Approval,
    #[serde(rename = "pcdstat", alias = "ProjectCityDevelopmentStatus")]
    city_development_status: Approval,
}

impl From<&Project> for ProjectDocument {
    fn from(project: &Project) -> Self {
        Self {
            doc_type: Some(PROJECT_DOC_TYPE.to_owned()),
            location: project.location.as_str().to_owned(),
            name: project.name.as_str().to_owned(),
            id: project.id.value(),
            survey_number: project.survey_number.value(),
            noc_response: project.approvals.noc_response,
            lake_auth_response: project.approvals.lake_auth_response,
            forest_auth_response: project.approvals.forest_auth_response,
            city_development_status: project.approvals.city_development_status,
        }
    }
}

impl TryFrom<ProjectDocument> for Project {
    type Error = ProjectCodecError;

    fn try_from(document: ProjectDocument) -> Result<Self, Self::Error> {
        if let Some(doc_type) = document.doc_type
            && doc_type != PROJECT_DOC_TYPE
        {
            return Err(ProjectCodecError::UnexpectedDocType(doc_type));
        }

        let location = Location::new(document.location)?;
        let name = ProjectName::new(document.name)?;
        Ok(Self::new(
            location,
            name,
            ProjectId::new(document.id),
            SurveyNumber::new(document.survey_number),
            ApprovalState {
                noc_response: document.noc_response,
                lake_auth_response: document.lake_auth_response,
                forest_auth_response: document.forest_auth_response,
                city_development_status: document.city_development_status,
            },
        ))
    }
}

/// Parses a caller-supplied approval string for the named field.
///
/// # Errors
///
/// Returns [`ProjectDomainError::EmptyField`] for an empty value or
/// [`ProjectDomainError::InvalidApproval`] when it is neither `Yes` nor `No`.
pub fn parse_approval(field: &'static str, raw: &str) -> Result<Approval, ProjectDomainError> {
    if raw.is_empty() {
        return Err(ProjectDomainError::EmptyField { field });
    }
    Approval::try_from(raw).map_err(|err| ProjectDomainError::InvalidApproval {
        field,
        value: err.0,
    })
}
