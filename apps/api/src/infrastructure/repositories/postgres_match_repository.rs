use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::map_write_error;
use crate::domain::matches::{Match, MatchStatus};
use crate::domain::repositories::{MatchRepository, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of MatchRepository
pub struct PostgresMatchRepository {
    pool: PgPool,
}

impl PostgresMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_by(&self, filter: &str, id: Option<Uuid>) -> RepositoryResult<Vec<Match>> {
        let sql = format!("{SELECT_MATCH} {filter} ORDER BY scheduled_at, id");
        let mut query = sqlx::query_as::<_, MatchRow>(&sql);
        if let Some(id) = id {
            query = query.bind(id);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Match::from).collect())
    }
}

#[derive(sqlx::FromRow)]
struct MatchRow {
    id: Uuid,
    league_id: Uuid,
    home_team_id: Uuid,
    away_team_id: Uuid,
    home_score: Option<i32>,
    away_score: Option<i32>,
    scheduled_at: DateTime<Utc>,
    status: MatchStatus,
    submitted_by: Option<Uuid>,
}

impl From<MatchRow> for Match {
    fn from(r: MatchRow) -> Self {
        Match::from_persistence(
            r.id,
            r.league_id,
            r.home_team_id,
            r.away_team_id,
            r.home_score,
            r.away_score,
            r.scheduled_at,
            r.status,
            r.submitted_by,
        )
    }
}

const SELECT_MATCH: &str = r#"
    SELECT
        id, league_id, home_team_id, away_team_id,
        home_score, away_score, scheduled_at, status, submitted_by
    FROM matches
"#;

#[async_trait]
impl MatchRepository for PostgresMatchRepository {
    async fn save(&self, m: &Match) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO matches (
                id, league_id, home_team_id, away_team_id,
                home_score, away_score, scheduled_at, status, submitted_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                home_score = EXCLUDED.home_score,
                away_score = EXCLUDED.away_score,
                scheduled_at = EXCLUDED.scheduled_at,
                status = EXCLUDED.status
            "#,
        )
        .bind(m.id())
        .bind(m.league_id())
        .bind(m.home_team_id())
        .bind(m.away_team_id())
        .bind(m.home_score())
        .bind(m.away_score())
        .bind(m.scheduled_at())
        .bind(m.status())
        .bind(m.submitted_by())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Match already exists", "Match references a missing league or team"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Match>> {
        let row = sqlx::query_as::<_, MatchRow>(&format!("{SELECT_MATCH} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Match::from))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Match>> {
        self.fetch_by("", None).await
    }

    async fn find_by_league(&self, league_id: Uuid) -> RepositoryResult<Vec<Match>> {
        self.fetch_by("WHERE league_id = $1", Some(league_id)).await
    }

    async fn find_by_team(&self, team_id: Uuid) -> RepositoryResult<Vec<Match>> {
        self.fetch_by("WHERE home_team_id = $1 OR away_team_id = $1", Some(team_id))
            .await
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Match {}", id)));
        }

        Ok(())
    }
}
