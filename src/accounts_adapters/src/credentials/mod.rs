pub mod argon2_hasher;

pub use argon2_hasher::{
    HashingError, compute_password_hash, hash_password, password_matches, verify_against_dummy,
    verify_password_hash, warm_up_dummy_hash,
};
