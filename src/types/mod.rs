pub mod assessment;
pub mod config;
pub mod language;
pub mod question;
