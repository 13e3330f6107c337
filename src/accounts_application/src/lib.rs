pub mod use_cases;

pub use use_cases::{
    GetProfileError, GetProfileUseCase, LoginError, LoginUseCase, RegisterUseCase,
    UpdateProfileError, UpdateProfileUseCase,
};
