use std::collections::BTreeSet;

use proptest::prelude::*;

use arena_league_backend::league::standings::{compute_standings, rank_order, POINTS_PER_WIN};
use arena_league_backend::models::match_result::{MatchResult, KNOCKOUT_MATCH_DAY_START};
use arena_league_backend::models::standings::StandingRow;

const NAMES: [&str; 6] = ["Apex", "Nova", "Orbit", "Pulse", "Zenith", "Ghost"];

fn team_name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES.to_vec()).prop_map(String::from)
}

fn match_result() -> impl Strategy<Value = MatchResult> {
    (
        1..120i32,
        team_name(),
        team_name(),
        0..4i32,
        0..4i32,
        any::<bool>(),
    )
        .prop_map(|(match_day, team_blue, team_red, score_blue, score_red, is_bye_win)| {
            let (winner, loser) = if score_blue >= score_red {
                (team_blue.clone(), team_red.clone())
            } else {
                (team_red.clone(), team_blue.clone())
            };
            MatchResult {
                match_day,
                team_blue,
                team_red,
                score_blue,
                score_red,
                winner: Some(winner),
                loser: Some(loser),
                is_bye_win,
            }
        })
}

fn league() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(
        prop::sample::select(NAMES[..5].to_vec()).prop_map(String::from),
        0..5,
    )
}

fn row_for<'a>(table: &'a [StandingRow], team: &str) -> &'a StandingRow {
    table.iter().find(|row| row.team == team).expect("team row present")
}

proptest! {
    #[test]
    fn one_row_per_team(teams in league(), results in prop::collection::vec(match_result(), 0..30)) {
        let table = compute_standings(&teams, &results);

        prop_assert_eq!(table.len(), teams.len());
        let names: BTreeSet<String> = table.iter().map(|row| row.team.clone()).collect();
        prop_assert_eq!(names, teams);
    }

    #[test]
    fn computation_is_idempotent(teams in league(), results in prop::collection::vec(match_result(), 0..30)) {
        let first = compute_standings(&teams, &results);
        let second = compute_standings(&teams, &results);

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn knockout_results_change_nothing(
        teams in league(),
        results in prop::collection::vec(match_result(), 0..20),
        knockout in prop::collection::vec(match_result(), 0..10),
    ) {
        let mut with_knockout = results.clone();
        with_knockout.extend(knockout.into_iter().map(|mut result| {
            result.match_day = result.match_day.max(KNOCKOUT_MATCH_DAY_START);
            result
        }));

        prop_assert_eq!(compute_standings(&teams, &results), compute_standings(&teams, &with_knockout));
    }

    #[test]
    fn byes_never_touch_goal_difference(teams in league(), results in prop::collection::vec(match_result(), 0..20)) {
        let byes: Vec<MatchResult> = results
            .into_iter()
            .map(|mut result| {
                result.is_bye_win = true;
                result
            })
            .collect();

        let table = compute_standings(&teams, &byes);

        prop_assert!(table.iter().all(|row| row.goal_difference == 0));
        prop_assert!(table.iter().all(|row| row.points == row.won * POINTS_PER_WIN));
    }

    #[test]
    fn a_played_match_awards_zero_or_three_points(result in match_result()) {
        let mut result = result;
        result.is_bye_win = false;
        result.match_day = 1;
        prop_assume!(result.team_blue != result.team_red);
        let teams: BTreeSet<String> = [result.team_blue.clone(), result.team_red.clone()].into_iter().collect();

        let table = compute_standings(&teams, &[result.clone()]);
        let awarded: u32 = table.iter().map(|row| row.points).sum();

        if result.score_blue == result.score_red {
            prop_assert_eq!(awarded, 0);
        } else {
            prop_assert_eq!(awarded, POINTS_PER_WIN);
        }
        let blue = row_for(&table, &result.team_blue);
        let red = row_for(&table, &result.team_red);
        prop_assert_eq!(blue.goal_difference, -red.goal_difference);
    }

    #[test]
    fn rows_are_ranked(teams in league(), results in prop::collection::vec(match_result(), 0..30)) {
        let table = compute_standings(&teams, &results);

        for pair in table.windows(2) {
            prop_assert_ne!(rank_order(&pair[0], &pair[1]), std::cmp::Ordering::Greater);
            let ordered = pair[0].points > pair[1].points
                || (pair[0].points == pair[1].points && pair[0].goal_difference > pair[1].goal_difference)
                || (pair[0].points == pair[1].points
                    && pair[0].goal_difference == pair[1].goal_difference
                    && pair[0].team < pair[1].team);
            prop_assert!(ordered);
        }
    }
}

#[test]
fn two_wins_sum_goal_difference() {
    let teams: BTreeSet<String> = ["A", "B"].iter().map(|name| name.to_string()).collect();
    let results = vec![
        MatchResult {
            match_day: 1,
            team_blue: "A".into(),
            team_red: "B".into(),
            score_blue: 2,
            score_red: 1,
            ..MatchResult::default()
        },
        MatchResult {
            match_day: 2,
            team_blue: "B".into(),
            team_red: "A".into(),
            score_blue: 0,
            score_red: 2,
            ..MatchResult::default()
        },
    ];

    let table = compute_standings(&teams, &results);

    assert_eq!(table[0].team, "A");
    assert_eq!(table[0].goal_difference, 3);
    assert_eq!(table[0].points, 6);
    assert_eq!(table[1].goal_difference, -3);
}

#[test]
fn missing_numeric_fields_default_to_zero() {
    let result: MatchResult = serde_json::from_str(r#"{"team_blue": "A", "team_red": "B"}"#).unwrap();

    assert_eq!(result.match_day, 0);
    assert_eq!(result.score_blue, 0);
    assert_eq!(result.score_red, 0);
    assert!(!result.is_bye_win);
}
