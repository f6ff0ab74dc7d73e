use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{map_delete_error, map_write_error};
use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamRepository};
use crate::domain::team::Team;

/// PostgreSQL implementation of TeamRepository
///
/// The one-team-per-captain rule is backed by the partial unique index
/// `teams_one_per_captain_idx`, so concurrent registrations cannot both win.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    league_id: Uuid,
    captain_id: Uuid,
    owner_exempt: bool,
    created_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(r: TeamRow) -> Self {
        Team::from_persistence(
            r.id,
            r.name,
            r.league_id,
            r.captain_id,
            r.owner_exempt,
            r.created_at,
        )
    }
}

const SELECT_TEAM: &str = r#"
    SELECT id, name, league_id, captain_id, owner_exempt, created_at
    FROM teams
"#;

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create(&self, team: &Team) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, league_id, captain_id, owner_exempt, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.league_id())
        .bind(team.captain_id())
        .bind(team.owner_exempt())
        .bind(team.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                "Captain already fields a team in this league",
                "Team references a missing league or captain",
            )
        })?;

        Ok(())
    }

    async fn update(&self, team: &Team) -> RepositoryResult<()> {
        let result = sqlx::query("UPDATE teams SET name = $2 WHERE id = $1")
            .bind(team.id())
            .bind(team.name())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Team {}", team.id())));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(&format!("{SELECT_TEAM} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Team::from))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>(&format!("{SELECT_TEAM} ORDER BY created_at, id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn find_by_league(&self, league_id: Uuid) -> RepositoryResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>(&format!(
            "{SELECT_TEAM} WHERE league_id = $1 ORDER BY created_at, id"
        ))
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn find_by_captain_in_league(
        &self,
        league_id: Uuid,
        captain_id: Uuid,
    ) -> RepositoryResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(&format!(
            "{SELECT_TEAM} WHERE league_id = $1 AND captain_id = $2 ORDER BY created_at LIMIT 1"
        ))
        .bind(league_id)
        .bind(captain_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Team::from))
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error(e, "Team still has matches"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Team {}", id)));
        }

        Ok(())
    }
}
