use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{ServiceError, ServiceResult};
use crate::domain::admission::{can_create_match, MatchPolicy};
use crate::domain::matches::{Match, MatchChanges};
use crate::domain::repositories::{LeagueRepository, MatchRepository, TeamRepository};

/// Details for a new match
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
}

/// Match scheduling and result entry
#[derive(Clone)]
pub struct MatchService {
    leagues: Arc<dyn LeagueRepository>,
    teams: Arc<dyn TeamRepository>,
    matches: Arc<dyn MatchRepository>,
    policy: MatchPolicy,
}

impl MatchService {
    pub fn new(
        leagues: Arc<dyn LeagueRepository>,
        teams: Arc<dyn TeamRepository>,
        matches: Arc<dyn MatchRepository>,
        policy: MatchPolicy,
    ) -> Self {
        Self {
            leagues,
            teams,
            matches,
            policy,
        }
    }

    /// Schedules a match after the admission rules accept it
    pub async fn create_match(&self, submitter_id: Uuid, input: NewMatch) -> ServiceResult<Match> {
        let league = self.leagues.find_by_id(input.league_id).await?;
        let home = self.teams.find_by_id(input.home_team_id).await?;
        let away = self.teams.find_by_id(input.away_team_id).await?;

        can_create_match(
            league.as_ref(),
            home.as_ref(),
            away.as_ref(),
            submitter_id,
            &self.policy,
        )?;

        let m = Match::schedule(
            input.league_id,
            input.home_team_id,
            input.away_team_id,
            input.scheduled_at,
            submitter_id,
        );
        self.matches.save(&m).await?;
        tracing::info!(match_id = %m.id(), league_id = %m.league_id(), "Match scheduled");

        Ok(m)
    }

    pub async fn get(&self, id: Uuid) -> ServiceResult<Match> {
        self.matches
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Match not found: {}", id)))
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<Match>> {
        Ok(self.matches.find_all().await?)
    }

    pub async fn list_by_league(&self, league_id: Uuid) -> ServiceResult<Vec<Match>> {
        Ok(self.matches.find_by_league(league_id).await?)
    }

    pub async fn list_by_team(&self, team_id: Uuid) -> ServiceResult<Vec<Match>> {
        Ok(self.matches.find_by_team(team_id).await?)
    }

    /// Records a result and/or reschedules; league owner only
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        changes: MatchChanges,
    ) -> ServiceResult<Match> {
        let mut m = self.owned(id, user_id).await?;
        m.record_update(changes).map_err(ServiceError::Validation)?;
        self.matches.save(&m).await?;

        if m.is_finished() {
            tracing::info!(
                match_id = %id,
                home_score = ?m.home_score(),
                away_score = ?m.away_score(),
                "Match result recorded"
            );
        }

        Ok(m)
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        self.owned(id, user_id).await?;
        self.matches.delete(id).await?;

        Ok(())
    }

    async fn owned(&self, id: Uuid, user_id: Uuid) -> ServiceResult<Match> {
        let m = self.get(id).await?;
        let owns_league = self
            .leagues
            .find_by_id(m.league_id())
            .await?
            .is_some_and(|league| league.is_owned_by(user_id));
        if !owns_league {
            return Err(ServiceError::Forbidden(
                "Only the league owner can manage matches".to_string(),
            ));
        }

        Ok(m)
    }
}
