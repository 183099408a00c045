//! # Classroom Manager
//!
//! Core library for a classroom PC management tool: a credential store with
//! salted password hashing and a role-gated authentication session.
//!
//! The presentation layer (login form, inventory screens, theming) sits on
//! top of this crate and is not part of it. It collects a username and
//! password, feeds them through [`auth::AuthSession::authenticate`], and
//! gates screens on the session's capability checks. The embedded SQLite
//! store behind [`auth::CredentialStore`] owns the persisted records and
//! every hashing secret.
//!
//! ## Core Modules
//!
//! - [`auth`]: Credential store, hashing, verification, and sessions
//! - [`db`]: Embedded database pool and configuration
//!
//! ## Example
//!
//! ```no_run
//! use classroom_manager::{AuthSession, CredentialStore, Database, DatabaseConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&DatabaseConfig::from_env()).await?;
//!     let store = CredentialStore::new(db.pool().clone());
//!     store.bootstrap().await?;
//!
//!     let mut session = AuthSession::new(store);
//!     let user = session.authenticate("admin", "admin123").await;
//!     assert!(user.is_some());
//!     Ok(())
//! }
//! ```

/// Credential storage, verification, and session management.
pub mod auth;
pub use auth::{AuthError, AuthResult, AuthSession, CredentialStore, Role, Theme, User};

/// Embedded database pool and configuration.
pub mod db;
pub use db::{Database, DatabaseConfig};
