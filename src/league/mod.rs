pub mod standings;
pub mod store;
pub mod validation;
