//! # Accounts - user account backend
//!
//! Facade crate that re-exports the public APIs of the account service
//! components, so an embedding application needs a single dependency.
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `Email`, `Password`, `AccountId`, etc.
//! - **Ports**: `AccountStore`, `SessionTokens`, `Clock`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `PostgresAccountStore`, `HashMapAccountStore`, `LocalJwtValidator`
//! - **Service**: `AccountService`, the router and standalone server

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use accounts_core::*;
}

pub use accounts_core::{
    Account, AccountId, AccountUpdate, Email, HashedPassword, NewAccount, Password, UserName,
    ValidationError,
};

// ============================================================================
// Ports
// ============================================================================

pub use accounts_core::{
    AccountStore, AccountStoreError, Clock, SessionError, SessionToken, SessionTokens, SystemClock,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use accounts_application::*;
}

pub use accounts_application::{
    GetProfileUseCase, LoginUseCase, RegisterUseCase, UpdateProfileUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Account store implementations
    pub mod persistence {
        pub use accounts_adapters::persistence::*;
    }

    /// Session token utilities
    pub mod auth {
        pub use accounts_adapters::auth_validation::*;
    }

    /// Password hashing
    pub mod credentials {
        pub use accounts_adapters::credentials::*;
    }

    /// Configuration
    pub mod config {
        pub use accounts_adapters::config::*;
    }

    pub use accounts_adapters::clock::ManualClock;
}

pub use accounts_adapters::{
    auth_validation::LocalJwtValidator,
    persistence::{HashMapAccountStore, PostgresAccountStore},
};

// ============================================================================
// HTTP surface and service
// ============================================================================

/// Axum routes and state
pub mod http_api {
    pub use accounts_axum::*;
}

pub use accounts_service::{
    AccountService,
    helpers::{configure_postgresql, get_postgres_pool},
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the store trait
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
