pub mod common;
pub mod match_result;
pub mod schedule;
pub mod standings;
pub mod team;
