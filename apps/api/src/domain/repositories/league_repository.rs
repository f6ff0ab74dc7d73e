use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::domain::league::League;

/// Repository trait for League aggregate
#[async_trait]
pub trait LeagueRepository: Send + Sync {
    /// Save a league (insert or update)
    async fn save(&self, league: &League) -> RepositoryResult<()>;

    /// Find a league by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<League>>;

    /// Active, non-private leagues ordered by name
    async fn find_public(&self) -> RepositoryResult<Vec<League>>;

    /// Active leagues whose city contains `city`, case-insensitive, ordered by name
    async fn find_by_city(&self, city: &str) -> RepositoryResult<Vec<League>>;

    /// All leagues owned by a user, newest first
    async fn find_by_owner(&self, owner_id: Uuid) -> RepositoryResult<Vec<League>>;

    /// Archived leagues ordered by name
    async fn find_archived(&self) -> RepositoryResult<Vec<League>>;

    /// Delete a league by ID
    ///
    /// Fails with `Conflict` while teams or matches still reference it.
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}
