use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use crate::league::store::{ResultStore, TeamRegistry};
use crate::models::match_result::MatchResult;
use crate::models::standings::StandingRow;
use crate::models::team::TeamName;

pub const POINTS_PER_WIN: u32 = 3;

/// Build the league table for `teams` from `results`.
///
/// Knockout rounds are ignored, as is any side of a result that does not
/// name a team in `teams`. A bye counts as a played match for both teams
/// but never moves goal difference. Best-of-N matches cannot be drawn, so a
/// level non-bye score is booked as a loss for both sides.
///
/// Rows come back ranked by points, then goal difference, then team name.
pub fn compute_standings(teams: &BTreeSet<TeamName>, results: &[MatchResult]) -> Vec<StandingRow> {
    let mut table: HashMap<&str, StandingRow> = teams
        .iter()
        .map(|team| (team.as_str(), StandingRow::new(team.clone())))
        .collect();

    for result in results.iter().filter(|result| !result.is_knockout()) {
        if result.is_bye_win {
            if let Some(winner) = result.winner.as_deref() {
                if let Some(row) = table.get_mut(winner) {
                    credit_win(row, 0);
                }
            }
            if let Some(loser) = result.loser.as_deref() {
                if let Some(row) = table.get_mut(loser) {
                    credit_loss(row, 0);
                }
            }
            continue;
        }

        tally_side(&mut table, &result.team_blue, result.score_blue, result.score_red);
        tally_side(&mut table, &result.team_red, result.score_red, result.score_blue);
    }

    let mut rows: Vec<StandingRow> = table.into_values().collect();
    rows.sort_by(rank_order);
    rows
}

fn tally_side(table: &mut HashMap<&str, StandingRow>, team: &str, own: i32, opponent: i32) {
    let Some(row) = table.get_mut(team) else {
        return;
    };
    let margin = own.saturating_sub(opponent);
    if own > opponent {
        credit_win(row, margin);
    } else {
        credit_loss(row, margin);
    }
}

// Tallies saturate at the integer bounds.
fn credit_win(row: &mut StandingRow, margin: i32) {
    row.played = row.played.saturating_add(1);
    row.won = row.won.saturating_add(1);
    row.points = row.points.saturating_add(POINTS_PER_WIN);
    row.goal_difference = row.goal_difference.saturating_add(margin);
}

fn credit_loss(row: &mut StandingRow, margin: i32) {
    row.played = row.played.saturating_add(1);
    row.lost = row.lost.saturating_add(1);
    row.goal_difference = row.goal_difference.saturating_add(margin);
}

/// Points desc, goal difference desc, team name asc.
pub fn rank_order(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| a.team.cmp(&b.team))
}

/// Service responsible for producing league standings from a snapshot of
/// the stores.
#[derive(Debug)]
pub struct StandingsService<R, T> {
    results: R,
    teams: T,
}

impl<R: ResultStore, T: TeamRegistry> StandingsService<R, T> {
    pub fn new(results: R, teams: T) -> Self {
        Self { results, teams }
    }

    /// Full league table. A failing store read degrades to an empty input
    /// rather than an error.
    pub async fn league_table(&self) -> Vec<StandingRow> {
        let (teams, results) = tokio::join!(self.teams.list_teams(), self.results.list_results());

        let teams = teams.unwrap_or_else(|e| {
            tracing::warn!("Failed to load teams for standings, using empty set: {}", e);
            BTreeSet::new()
        });
        let results = results.unwrap_or_else(|e| {
            tracing::warn!("Failed to load results for standings, using empty set: {}", e);
            Vec::new()
        });

        tracing::debug!(
            "Computing standings for {} teams from {} results",
            teams.len(),
            results.len()
        );
        compute_standings(&teams, &results)
    }

    /// Row for a single team, `None` if the team is not registered.
    pub async fn team_standing(&self, team: &str) -> Option<StandingRow> {
        self.league_table()
            .await
            .into_iter()
            .find(|row| row.team == team)
    }
}
