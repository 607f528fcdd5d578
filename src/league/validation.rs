use crate::error::ValidationError;
use crate::models::match_result::{MatchResult, RecordResultRequest};
use crate::models::schedule::CreateFixtureRequest;
use crate::models::team::{CreatePlayerRequest, CreateTeamRequest};

/// Upper bound on games a side can win inside one match (best-of-13).
pub const MAX_GAME_WINS: i32 = 7;
pub const MAX_NAME_LENGTH: usize = 100;

/// Centralized validation for league write requests.
///
/// Requests are normalized on the way in so the stores only ever hold
/// well-formed rows.
#[derive(Debug, Default)]
pub struct LeagueValidator;

impl LeagueValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a name used for teams and players, returning it trimmed.
    pub fn validate_name(&self, field: &str, name: &str) -> Result<String, ValidationError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::new(format!("{} cannot be empty", field)));
        }

        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::new(format!(
                "{} too long (maximum {} characters)",
                field, MAX_NAME_LENGTH
            )));
        }

        if trimmed.contains('\0') {
            return Err(ValidationError::new(format!("{} contains invalid characters", field)));
        }

        if !trimmed.chars().any(|c| c.is_alphanumeric()) {
            return Err(ValidationError::new(format!(
                "{} must contain alphanumeric characters",
                field
            )));
        }

        Ok(trimmed.to_string())
    }

    pub fn validate_match_day(&self, match_day: i32) -> Result<(), ValidationError> {
        if match_day < 1 {
            return Err(ValidationError::new(format!(
                "Match day must be at least 1, got {}",
                match_day
            )));
        }
        Ok(())
    }

    /// Validate game-win counts of a single match
    pub fn validate_scores(&self, score_blue: i32, score_red: i32) -> Result<(), ValidationError> {
        for score in [score_blue, score_red] {
            if !(0..=MAX_GAME_WINS).contains(&score) {
                return Err(ValidationError::new(format!(
                    "Score {} out of range (0-{})",
                    score, MAX_GAME_WINS
                )));
            }
        }
        Ok(())
    }

    fn validate_pairing(&self, team_blue: &str, team_red: &str) -> Result<(String, String), ValidationError> {
        let blue = self.validate_name("Blue team", team_blue)?;
        let red = self.validate_name("Red team", team_red)?;
        if blue == red {
            return Err(ValidationError::new(format!("A team cannot play itself: {}", blue)));
        }
        Ok((blue, red))
    }

    /// Validate a result submission and derive winner/loser for played matches.
    pub fn validate_result(&self, request: &RecordResultRequest) -> Result<MatchResult, ValidationError> {
        self.validate_match_day(request.match_day)?;
        let (team_blue, team_red) = self.validate_pairing(&request.team_blue, &request.team_red)?;
        self.validate_scores(request.score_blue, request.score_red)?;

        let (winner, loser) = if request.is_bye_win {
            let winner = request
                .winner
                .as_deref()
                .map(|w| self.validate_name("Winner", w))
                .transpose()?
                .ok_or_else(|| ValidationError::new("A bye win requires a winner"))?;
            let loser = request
                .loser
                .as_deref()
                .map(|l| self.validate_name("Loser", l))
                .transpose()?
                .ok_or_else(|| ValidationError::new("A bye win requires a loser"))?;

            let participants = [team_blue.as_str(), team_red.as_str()];
            if winner == loser || !participants.contains(&winner.as_str()) || !participants.contains(&loser.as_str()) {
                return Err(ValidationError::new(
                    "Bye winner and loser must be the two teams of the match",
                ));
            }
            (winner, loser)
        } else if request.score_blue > request.score_red {
            (team_blue.clone(), team_red.clone())
        } else if request.score_red > request.score_blue {
            (team_red.clone(), team_blue.clone())
        } else {
            return Err(ValidationError::new(format!(
                "Draws are not possible in best-of-N matches ({}-{})",
                request.score_blue, request.score_red
            )));
        };

        Ok(MatchResult {
            match_day: request.match_day,
            team_blue,
            team_red,
            score_blue: request.score_blue,
            score_red: request.score_red,
            winner: Some(winner),
            loser: Some(loser),
            is_bye_win: request.is_bye_win,
        })
    }

    pub fn validate_logo_url(&self, url: &str) -> Result<String, ValidationError> {
        let trimmed = url.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ValidationError::new("Logo URL must start with http:// or https://"));
        }
        Ok(trimmed.to_string())
    }

    pub fn validate_team(&self, request: &CreateTeamRequest) -> Result<CreateTeamRequest, ValidationError> {
        let name = self.validate_name("Team name", &request.name)?;
        let logo_url = match request.logo_url.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(url) => Some(self.validate_logo_url(url)?),
        };
        Ok(CreateTeamRequest { name, logo_url })
    }

    pub fn validate_player(&self, request: &CreatePlayerRequest) -> Result<CreatePlayerRequest, ValidationError> {
        let nickname = self.validate_name("Nickname", &request.nickname)?;
        let team_name = match request.team_name.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(team) => Some(self.validate_name("Team name", team)?),
        };
        let role = request
            .role
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(String::from);
        Ok(CreatePlayerRequest { nickname, team_name, role })
    }

    pub fn validate_fixture(&self, request: &CreateFixtureRequest) -> Result<CreateFixtureRequest, ValidationError> {
        self.validate_match_day(request.match_day)?;
        let (team_blue, team_red) = self.validate_pairing(&request.team_blue, &request.team_red)?;
        Ok(CreateFixtureRequest {
            match_day: request.match_day,
            team_blue,
            team_red,
            scheduled_at: request.scheduled_at,
        })
    }
}
