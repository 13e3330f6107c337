pub mod account;
pub mod account_id;
pub mod email;
pub mod error;
pub mod hashed_password;
pub mod password;
pub mod user_name;
