use serde::{Deserialize, Serialize};

/// Progress of a match
///
/// ```text
/// Scheduled -> Finished
/// ```
/// `Pending` is stored and reported but no operation moves a match into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "match_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Pending,
    Finished,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Scheduled => write!(f, "scheduled"),
            MatchStatus::Pending => write!(f, "pending"),
            MatchStatus::Finished => write!(f, "finished"),
        }
    }
}
