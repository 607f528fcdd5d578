pub mod player_handler;
pub mod results_handler;
pub mod schedule_handler;
pub mod standings_handler;
pub mod team_handler;
