use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{map_delete_error, map_write_error};
use crate::domain::league::{League, LeagueStatus, SportType};
use crate::domain::repositories::{LeagueRepository, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of LeagueRepository
pub struct PostgresLeagueRepository {
    pool: PgPool,
}

impl PostgresLeagueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, filter: &str, bind: Option<String>) -> RepositoryResult<Vec<League>> {
        let sql = format!("{SELECT_LEAGUE} {filter}");
        let mut query = sqlx::query_as::<_, LeagueRow>(&sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(League::from).collect())
    }
}

#[derive(sqlx::FromRow)]
struct LeagueRow {
    id: Uuid,
    name: String,
    city: String,
    sport_type: SportType,
    is_private: bool,
    owner_id: Uuid,
    status: LeagueStatus,
    created_at: DateTime<Utc>,
}

impl From<LeagueRow> for League {
    fn from(r: LeagueRow) -> Self {
        League::from_persistence(
            r.id,
            r.name,
            r.city,
            r.sport_type,
            r.is_private,
            r.owner_id,
            r.status,
            r.created_at,
        )
    }
}

const SELECT_LEAGUE: &str = r#"
    SELECT id, name, city, sport_type, is_private, owner_id, status, created_at
    FROM leagues
"#;

#[async_trait]
impl LeagueRepository for PostgresLeagueRepository {
    async fn save(&self, league: &League) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO leagues (
                id, name, city, sport_type, is_private, owner_id, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                city = EXCLUDED.city,
                sport_type = EXCLUDED.sport_type,
                is_private = EXCLUDED.is_private,
                status = EXCLUDED.status
            "#,
        )
        .bind(league.id())
        .bind(league.name())
        .bind(league.city())
        .bind(league.sport_type())
        .bind(league.is_private())
        .bind(league.owner_id())
        .bind(league.status())
        .bind(league.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "League already exists", "League owner does not exist"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<League>> {
        let row = sqlx::query_as::<_, LeagueRow>(&format!("{SELECT_LEAGUE} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(League::from))
    }

    async fn find_public(&self) -> RepositoryResult<Vec<League>> {
        self.fetch(
            "WHERE status = 'active' AND NOT is_private ORDER BY name, id",
            None,
        )
        .await
    }

    async fn find_by_city(&self, city: &str) -> RepositoryResult<Vec<League>> {
        let escaped = city.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
        self.fetch(
            "WHERE status = 'active' AND city ILIKE '%' || $1 || '%' ORDER BY name, id",
            Some(escaped),
        )
        .await
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> RepositoryResult<Vec<League>> {
        let rows = sqlx::query_as::<_, LeagueRow>(&format!(
            "{SELECT_LEAGUE} WHERE owner_id = $1 ORDER BY created_at DESC, id"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(League::from).collect())
    }

    async fn find_archived(&self) -> RepositoryResult<Vec<League>> {
        self.fetch("WHERE status = 'archived' ORDER BY name, id", None)
            .await
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM leagues WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error(e, "League still has teams or matches"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("League {}", id)));
        }

        Ok(())
    }
}
