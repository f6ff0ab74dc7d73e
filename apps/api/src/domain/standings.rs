//! League table computation from finished matches.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::matches::Match;
use crate::domain::team::Team;

const POINTS_FOR_WIN: u32 = 3;
const POINTS_FOR_DRAW: u32 = 1;

/// One team's line in the league table. Derived on every request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub team_id: Uuid,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingsRow {
    fn new(team: &Team) -> Self {
        Self {
            team_id: team.id(),
            team_name: team.name().to_string(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    fn record(&mut self, scored: i64, conceded: i64) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;

        if scored > conceded {
            self.won += 1;
            self.points += POINTS_FOR_WIN;
        } else if scored < conceded {
            self.lost += 1;
        } else {
            self.drawn += 1;
            self.points += POINTS_FOR_DRAW;
        }
    }

    /// Ranking key, compared descending.
    fn rank_key(&self) -> (u32, i64, i64) {
        (self.points, self.goal_difference, self.goals_for)
    }
}

/// Compute the ranked table for `teams` from `matches`.
///
/// 1. Only finished matches count.
/// 2. A match naming a team outside `teams` is skipped without error.
/// 3. An unset score counts as 0.
/// 4. Win 3 points, draw 1, loss 0.
/// 5. Rows are ordered by points, then goal difference, then goals scored,
///    all descending. Remaining ties keep the order of `teams`.
///
/// Pure: the same inputs always produce the same table.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = Vec::with_capacity(teams.len());
    let mut index: HashMap<Uuid, usize> = HashMap::with_capacity(teams.len());

    for team in teams {
        if index.contains_key(&team.id()) {
            continue;
        }
        index.insert(team.id(), rows.len());
        rows.push(StandingsRow::new(team));
    }

    for m in matches.iter().filter(|m| m.is_finished()) {
        let (Some(&home), Some(&away)) =
            (index.get(&m.home_team_id()), index.get(&m.away_team_id()))
        else {
            tracing::debug!(
                match_id = %m.id(),
                home_team_id = %m.home_team_id(),
                away_team_id = %m.away_team_id(),
                "Skipping finished match with a team outside the league table"
            );
            continue;
        };

        let home_score = i64::from(m.home_score().unwrap_or(0));
        let away_score = i64::from(m.away_score().unwrap_or(0));

        rows[home].record(home_score, away_score);
        rows[away].record(away_score, home_score);
    }

    for row in &mut rows {
        row.goal_difference = row.goals_for - row.goals_against;
    }

    // sort_by is stable, so equal keys keep team input order
    rows.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()));
    rows
}
