use std::sync::Arc;

use uuid::Uuid;

use super::{ServiceError, ServiceResult};
use crate::domain::league::{League, LeagueChanges, SportType};
use crate::domain::repositories::{LeagueRepository, MatchRepository, TeamRepository};
use crate::domain::standings::{compute_standings, StandingsRow};

/// Details for a new league
#[derive(Debug, Clone)]
pub struct NewLeague {
    pub name: String,
    pub city: String,
    pub sport_type: SportType,
    pub is_private: bool,
}

/// League lifecycle, queries and standings
#[derive(Clone)]
pub struct LeagueService {
    leagues: Arc<dyn LeagueRepository>,
    teams: Arc<dyn TeamRepository>,
    matches: Arc<dyn MatchRepository>,
}

impl LeagueService {
    pub fn new(
        leagues: Arc<dyn LeagueRepository>,
        teams: Arc<dyn TeamRepository>,
        matches: Arc<dyn MatchRepository>,
    ) -> Self {
        Self {
            leagues,
            teams,
            matches,
        }
    }

    pub async fn create_league(&self, owner_id: Uuid, input: NewLeague) -> ServiceResult<League> {
        let league = League::new(
            input.name,
            input.city,
            input.sport_type,
            input.is_private,
            owner_id,
        )
        .map_err(ServiceError::Validation)?;

        self.leagues.save(&league).await?;
        tracing::info!(league_id = %league.id(), %owner_id, "League created");

        Ok(league)
    }

    pub async fn get(&self, id: Uuid) -> ServiceResult<League> {
        self.leagues
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("League not found: {}", id)))
    }

    pub async fn list_public(&self) -> ServiceResult<Vec<League>> {
        Ok(self.leagues.find_public().await?)
    }

    pub async fn list_by_city(&self, city: &str) -> ServiceResult<Vec<League>> {
        Ok(self.leagues.find_by_city(city.trim()).await?)
    }

    pub async fn list_by_owner(&self, owner_id: Uuid) -> ServiceResult<Vec<League>> {
        Ok(self.leagues.find_by_owner(owner_id).await?)
    }

    pub async fn list_archived(&self) -> ServiceResult<Vec<League>> {
        Ok(self.leagues.find_archived().await?)
    }

    /// Updates league details; only the owner may do this
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        changes: LeagueChanges,
    ) -> ServiceResult<League> {
        let mut league = self.owned(id, user_id, "update").await?;
        league.apply(changes).map_err(ServiceError::Validation)?;
        self.leagues.save(&league).await?;

        Ok(league)
    }

    /// Moves the league to `Archived`; only the owner may do this
    pub async fn archive(&self, id: Uuid, user_id: Uuid) -> ServiceResult<League> {
        let mut league = self.owned(id, user_id, "archive").await?;
        league.archive().map_err(ServiceError::Conflict)?;
        self.leagues.save(&league).await?;
        tracing::info!(league_id = %id, "League archived");

        Ok(league)
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        self.owned(id, user_id, "delete").await?;
        self.leagues.delete(id).await?;
        tracing::info!(league_id = %id, "League deleted");

        Ok(())
    }

    /// Ranked table of the league's teams over its finished matches
    pub async fn standings(&self, id: Uuid) -> ServiceResult<Vec<StandingsRow>> {
        let league = self.get(id).await?;
        let teams = self.teams.find_by_league(league.id()).await?;
        let matches = self.matches.find_by_league(league.id()).await?;

        Ok(compute_standings(&teams, &matches))
    }

    async fn owned(&self, id: Uuid, user_id: Uuid, action: &str) -> ServiceResult<League> {
        let league = self.get(id).await?;
        if !league.is_owned_by(user_id) {
            return Err(ServiceError::Forbidden(format!(
                "Only the league owner can {} the league",
                action
            )));
        }
        Ok(league)
    }
}
