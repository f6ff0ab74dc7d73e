use serde::{Deserialize, Serialize};

/// Lifecycle status of a league
///
/// # Status Transitions
/// ```text
/// Active -> Archived
/// ```
/// There is no way back from `Archived`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "league_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LeagueStatus {
    /// League accepts new teams and matches
    Active,
    /// League is frozen
    Archived,
}

impl LeagueStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// # Example
    /// ```
    /// use ligamanager_api::domain::league::value_objects::LeagueStatus;
    ///
    /// assert!(LeagueStatus::Active.can_transition_to(LeagueStatus::Archived));
    /// assert!(!LeagueStatus::Archived.can_transition_to(LeagueStatus::Active));
    /// ```
    pub fn can_transition_to(&self, next: LeagueStatus) -> bool {
        matches!((self, next), (LeagueStatus::Active, LeagueStatus::Archived))
    }
}

impl std::fmt::Display for LeagueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueStatus::Active => write!(f, "active"),
            LeagueStatus::Archived => write!(f, "archived"),
        }
    }
}

/// Sport played in a league
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sport_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SportType {
    Football,
    Volleyball,
    Basketball,
    Handball,
    Other,
}

impl std::fmt::Display for SportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SportType::Football => "football",
            SportType::Volleyball => "volleyball",
            SportType::Basketball => "basketball",
            SportType::Handball => "handball",
            SportType::Other => "other",
        };
        f.write_str(name)
    }
}
