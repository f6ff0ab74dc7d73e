use super::value_objects::MatchStatus;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Match aggregate root
///
/// A fixture between two teams of the same league. Scores stay unset until
/// a result is recorded; recording both scores finishes the match.
///
/// Membership of both teams in the league is checked by
/// [`can_create_match`](crate::domain::admission::can_create_match) before a
/// match is scheduled.
#[derive(Debug, Clone)]
pub struct Match {
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

/// Partial update of a match: a result, a new date, or both
#[derive(Debug, Clone, Default)]
pub struct MatchChanges {
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl Match {
    /// Schedules a new match with unset scores
    pub fn schedule(
        league_id: Uuid,
        home_team_id: Uuid,
        away_team_id: Uuid,
        scheduled_at: DateTime<Utc>,
        submitted_by: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            league_id,
            home_team_id,
            away_team_id,
            home_score: None,
            away_score: None,
            scheduled_at,
            status: MatchStatus::Scheduled,
            submitted_by: Some(submitted_by),
        }
    }

    /// Applies a result and/or a new date
    ///
    /// # Business Rules
    /// - Scores come in pairs; a lone home or away score is rejected
    /// - Scores cannot be negative
    /// - Recording both scores sets the status to `Finished`
    /// - An empty change set is a no-op
    pub fn record_update(&mut self, changes: MatchChanges) -> Result<(), String> {
        match (changes.home_score, changes.away_score) {
            (Some(home), Some(away)) => {
                if home < 0 || away < 0 {
                    return Err("Scores cannot be negative".to_string());
                }
                self.home_score = Some(home);
                self.away_score = Some(away);
                self.status = MatchStatus::Finished;
            }
            (None, None) => {}
            _ => return Err("Both home and away scores are required".to_string()),
        }

        if let Some(scheduled_at) = changes.scheduled_at {
            self.scheduled_at = scheduled_at;
        }

        Ok(())
    }

    pub fn involves(&self, team_id: Uuid) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn league_id(&self) -> Uuid {
        self.league_id
    }

    pub fn home_team_id(&self) -> Uuid {
        self.home_team_id
    }

    pub fn away_team_id(&self) -> Uuid {
        self.away_team_id
    }

    pub fn home_score(&self) -> Option<i32> {
        self.home_score
    }

    pub fn away_score(&self) -> Option<i32> {
        self.away_score
    }

    pub fn scheduled_at(&self) -> DateTime<Utc> {
        self.scheduled_at
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn submitted_by(&self) -> Option<Uuid> {
        self.submitted_by
    }

    /// Reconstructs a Match from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations and test fixtures.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        league_id: Uuid,
        home_team_id: Uuid,
        away_team_id: Uuid,
        home_score: Option<i32>,
        away_score: Option<i32>,
        scheduled_at: DateTime<Utc>,
        status: MatchStatus,
        submitted_by: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            league_id,
            home_team_id,
            away_team_id,
            home_score,
            away_score,
            scheduled_at,
            status,
            submitted_by,
        }
    }
}
