// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_league_repository;
pub mod postgres_match_repository;
pub mod postgres_team_repository;
pub mod postgres_user_repository;

pub use in_memory::InMemoryStore;
pub use postgres_league_repository::PostgresLeagueRepository;
pub use postgres_match_repository::PostgresMatchRepository;
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_user_repository::PostgresUserRepository;

use crate::domain::repositories::RepositoryError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) => db.code().map(|code| code.into_owned()),
        _ => None,
    }
}

/// Maps insert/update failures: unique violations to `Conflict`, foreign-key
/// violations to `MissingReference`, everything else to `Database`
pub(crate) fn map_write_error(err: sqlx::Error, duplicate: &str, missing: &str) -> RepositoryError {
    match sqlstate(&err).as_deref() {
        Some(UNIQUE_VIOLATION) => RepositoryError::Conflict(duplicate.to_string()),
        Some(FOREIGN_KEY_VIOLATION) => RepositoryError::MissingReference(missing.to_string()),
        _ => RepositoryError::Database(err),
    }
}

/// Maps delete failures; a foreign-key violation means the row is still referenced
pub(crate) fn map_delete_error(err: sqlx::Error, referenced: &str) -> RepositoryError {
    match sqlstate(&err).as_deref() {
        Some(FOREIGN_KEY_VIOLATION) => RepositoryError::Conflict(referenced.to_string()),
        _ => RepositoryError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_constraint_errors_stay_database_errors() {
        let write = map_write_error(sqlx::Error::RowNotFound, "dup", "missing");
        let delete = map_delete_error(sqlx::Error::PoolTimedOut, "referenced");

        assert!(matches!(write, RepositoryError::Database(_)));
        assert!(matches!(delete, RepositoryError::Database(_)));
    }
}
