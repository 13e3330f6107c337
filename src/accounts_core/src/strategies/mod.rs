pub mod auth_validator;
pub mod session_tokens;
