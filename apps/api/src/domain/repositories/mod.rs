// Repository ports
// Async traits implemented by the infrastructure adapters

pub mod league_repository;
pub mod match_repository;
pub mod team_repository;
pub mod user_repository;

pub use league_repository::LeagueRepository;
pub use match_repository::MatchRepository;
pub use team_repository::TeamRepository;
pub use user_repository::{User, UserRepository};

use thiserror::Error;

/// Errors raised by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A uniqueness constraint refused the write, or a delete hit a row
    /// that is still referenced
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A write referenced a row that does not exist
    #[error("Missing reference: {0}")]
    MissingReference(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
