use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::domain::matches::Match;

/// Repository trait for Match aggregate
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Save a match (insert or update)
    async fn save(&self, m: &Match) -> RepositoryResult<()>;

    /// Find a match by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Match>>;

    /// All matches ordered by date
    async fn find_all(&self) -> RepositoryResult<Vec<Match>>;

    /// Matches of a league ordered by date
    async fn find_by_league(&self, league_id: Uuid) -> RepositoryResult<Vec<Match>>;

    /// Matches where the team plays home or away, ordered by date
    async fn find_by_team(&self, team_id: Uuid) -> RepositoryResult<Vec<Match>>;

    /// Delete a match by ID
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}
