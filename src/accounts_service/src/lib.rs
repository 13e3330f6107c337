pub mod account_service;
pub mod helpers;
pub mod tracing;

pub use account_service::AccountService;
