//! Admission rules gating team and match creation
//!
//! Pure decisions over records the caller has already fetched. A missing
//! record is treated the same as a record that fails the check, so callers
//! see one rejection per failed rule and never a separate "not found".

use thiserror::Error;
use uuid::Uuid;

use crate::domain::league::League;
use crate::domain::team::Team;

/// Reason a team or match was not admitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdmissionRejection {
    #[error("League is unavailable")]
    LeagueUnavailable,

    #[error("Only the league owner can schedule matches")]
    NotAuthorized,

    #[error("Home team does not belong to the league")]
    InvalidHomeTeam,

    #[error("Away team does not belong to the league")]
    InvalidAwayTeam,

    #[error("A team cannot play against itself")]
    SameTeam,

    #[error("Captain already fields a team in this league")]
    CaptainAlreadyHasTeam,
}

impl AdmissionRejection {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            AdmissionRejection::LeagueUnavailable => "league_unavailable",
            AdmissionRejection::NotAuthorized => "not_authorized",
            AdmissionRejection::InvalidHomeTeam => "invalid_home_team",
            AdmissionRejection::InvalidAwayTeam => "invalid_away_team",
            AdmissionRejection::SameTeam => "same_team",
            AdmissionRejection::CaptainAlreadyHasTeam => "captain_already_has_team",
        }
    }
}

/// Product switches for match admission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    /// Whether a match may name the same team as home and away
    pub allow_self_play: bool,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            allow_self_play: true,
        }
    }
}

/// Decides whether `submitter_id` may schedule a match between `home` and `away`
///
/// # Rules (checked in order)
/// 1. League exists and is active
/// 2. Submitter owns the league
/// 3. Home team exists and belongs to the league
/// 4. Away team exists and belongs to the league
/// 5. Home and away differ, unless `policy.allow_self_play`
pub fn can_create_match(
    league: Option<&League>,
    home: Option<&Team>,
    away: Option<&Team>,
    submitter_id: Uuid,
    policy: &MatchPolicy,
) -> Result<(), AdmissionRejection> {
    let league = league
        .filter(|l| l.is_active())
        .ok_or(AdmissionRejection::LeagueUnavailable)?;

    if !league.is_owned_by(submitter_id) {
        return Err(AdmissionRejection::NotAuthorized);
    }

    let home = home
        .filter(|t| t.league_id() == league.id())
        .ok_or(AdmissionRejection::InvalidHomeTeam)?;

    let away = away
        .filter(|t| t.league_id() == league.id())
        .ok_or(AdmissionRejection::InvalidAwayTeam)?;

    if !policy.allow_self_play && home.id() == away.id() {
        return Err(AdmissionRejection::SameTeam);
    }

    Ok(())
}

/// Decides whether `captain_id` may register a team in `league`
///
/// `existing` is the team `captain_id` already captains in this league, if any.
///
/// # Rules
/// 1. League exists, is active and is not private
/// 2. A captain other than the league owner may hold only one team per league
pub fn can_create_team(
    league: Option<&League>,
    captain_id: Uuid,
    existing: Option<&Team>,
) -> Result<(), AdmissionRejection> {
    let league = league
        .filter(|l| l.is_active() && !l.is_private())
        .ok_or(AdmissionRejection::LeagueUnavailable)?;

    if !league.is_owned_by(captain_id) && existing.is_some() {
        return Err(AdmissionRejection::CaptainAlreadyHasTeam);
    }

    Ok(())
}
