pub mod auth_validation;
pub mod clock;
pub mod config;
pub mod credentials;
pub mod persistence;
