//! Authentication module providing credential storage, verification, and
//! role-gated sessions.
//!
//! This module implements the login core with:
//! - PBKDF2-HMAC-SHA256 password hashing (100k iterations, per-user salt)
//! - Constant-time digest comparison
//! - Fail-closed verification (lookup miss, wrong password, and storage
//!   failure are indistinguishable to the caller)
//! - Two-tier role gating (admin capability is a superset of teacher)
//! - A singleton theme preference with write-time coercion
//!
//! ## Example
//!
//! ```no_run
//! use classroom_manager::auth::{AuthSession, CredentialStore};
//! use classroom_manager::db::{Database, DatabaseConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&DatabaseConfig::from_env()).await?;
//!     let store = CredentialStore::new(db.pool().clone());
//!     store.bootstrap().await?;
//!
//!     let mut session = AuthSession::new(store);
//!     if session.authenticate("teacher", "123456").await.is_some() {
//!         println!("teacher features enabled: {}", session.can_access_teacher());
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod models;
pub mod session;
pub mod store;

pub use errors::{AuthError, AuthResult};
pub use models::{Role, Theme, User};
pub use session::AuthSession;
pub use store::CredentialStore;
