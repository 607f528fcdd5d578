use reqwest::Client;
use serde_json::{json, Value};

/// Register a team through the API and return the response body
pub async fn create_team(client: &Client, app_address: &str, name: &str) -> Value {
    let response = client
        .post(&format!("{}/league/teams", app_address))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create team");

    assert_eq!(201, response.status().as_u16(), "Team {} should be created", name);
    response.json().await.expect("Failed to parse team response")
}

/// Record a played (non-bye) result through the API
pub async fn record_result(
    client: &Client,
    app_address: &str,
    match_day: i32,
    team_blue: &str,
    team_red: &str,
    score_blue: i32,
    score_red: i32,
) -> Value {
    let response = client
        .post(&format!("{}/league/results", app_address))
        .json(&json!({
            "match_day": match_day,
            "team_blue": team_blue,
            "team_red": team_red,
            "score_blue": score_blue,
            "score_red": score_red
        }))
        .send()
        .await
        .expect("Failed to record result");

    assert_eq!(201, response.status().as_u16());
    response.json().await.expect("Failed to parse result response")
}

/// Record a walkover through the API
pub async fn record_bye(
    client: &Client,
    app_address: &str,
    match_day: i32,
    winner: &str,
    loser: &str,
) -> Value {
    let response = client
        .post(&format!("{}/league/results", app_address))
        .json(&json!({
            "match_day": match_day,
            "team_blue": winner,
            "team_red": loser,
            "winner": winner,
            "loser": loser,
            "is_bye_win": true
        }))
        .send()
        .await
        .expect("Failed to record bye");

    assert_eq!(201, response.status().as_u16());
    response.json().await.expect("Failed to parse bye response")
}

pub async fn get_standings(client: &Client, app_address: &str) -> Vec<Value> {
    let response = client
        .get(&format!("{}/league/standings", app_address))
        .send()
        .await
        .expect("Failed to fetch standings");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse standings");
    assert_eq!(body["success"], true);
    body["data"]["standings"]
        .as_array()
        .expect("standings should be an array")
        .clone()
}
