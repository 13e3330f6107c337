pub mod get_profile;
pub mod login;
pub mod register;
pub mod update_profile;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export for convenience
pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use login::{LoginError, LoginUseCase};
pub use register::RegisterUseCase;
pub use update_profile::{UpdateProfileError, UpdateProfileUseCase};
