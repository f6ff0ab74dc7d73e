// Application services
// Fetch records from the repositories, apply the domain rules and persist

pub mod league_service;
pub mod match_service;
pub mod team_service;

pub use league_service::{LeagueService, NewLeague};
pub use match_service::{MatchService, NewMatch};
pub use team_service::{NewTeam, TeamService};

use thiserror::Error;

use crate::domain::admission::AdmissionRejection;
use crate::domain::repositories::RepositoryError;

/// Errors returned by the application services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Rejected(#[from] AdmissionRejection),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => ServiceError::NotFound(format!("{} not found", what)),
            RepositoryError::Conflict(reason) => ServiceError::Conflict(reason),
            RepositoryError::MissingReference(reason) => ServiceError::NotFound(reason),
            other => ServiceError::Repository(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
