use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::domain::team::Team;

/// Repository trait for Team aggregate
///
/// Implementations must refuse a second team for the same captain in the same
/// league (unless the team is owner-exempt) with `RepositoryError::Conflict`,
/// atomically with the insert. A team whose league or captain row is missing
/// is refused with `RepositoryError::MissingReference`.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a new team
    async fn create(&self, team: &Team) -> RepositoryResult<()>;

    /// Persist changes to an existing team
    async fn update(&self, team: &Team) -> RepositoryResult<()>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>>;

    /// All teams, oldest first
    async fn find_all(&self) -> RepositoryResult<Vec<Team>>;

    /// Teams of a league in registration order
    async fn find_by_league(&self, league_id: Uuid) -> RepositoryResult<Vec<Team>>;

    /// The team `captain_id` captains in `league_id`, if any
    async fn find_by_captain_in_league(
        &self,
        league_id: Uuid,
        captain_id: Uuid,
    ) -> RepositoryResult<Option<Team>>;

    /// Delete a team by ID
    ///
    /// Fails with `Conflict` while matches still reference it.
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}
