pub mod results;
pub mod schedule;
pub mod teams;
