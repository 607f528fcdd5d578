use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::match_result::MatchResult;
use crate::models::team::TeamName;

/// Source of recorded match results for the current tournament.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn list_results(&self) -> Result<Vec<MatchResult>, StoreError>;
}

/// Source of the team names currently registered in the league.
///
/// Implementations reconcile whatever records name a team and hand back a
/// clean set; the standings code never sees raw rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamRegistry: Send + Sync {
    async fn list_teams(&self) -> Result<BTreeSet<TeamName>, StoreError>;
}
