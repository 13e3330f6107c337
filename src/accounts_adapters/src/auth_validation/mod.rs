//! Session token issuing and validation.
//!
//! Tokens are HS256 JWTs carried in an HTTP-only cookie. There is no
//! server-side revocation list: a token stays valid until its `exp` even after
//! the owner logs out.

pub mod local_jwt_validator;

pub use local_jwt_validator::{
    Claims, JwtAuthConfig, LocalJwtValidator, create_auth_cookie, create_removal_cookie,
    extract_token, generate_auth_token,
};
