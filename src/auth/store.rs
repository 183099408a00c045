//! Credential store implementation.

use super::{
    errors::AuthResult,
    models::{Role, Theme},
};
use log::{debug, warn};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use sqlx::{Row, sqlite::SqlitePool};
use subtle::ConstantTimeEq;

/// PBKDF2-HMAC-SHA256 work factor
const PBKDF2_ITERATIONS: u32 = 100_000;

/// Random salt length in bytes (stored hex-encoded)
const SALT_LEN: usize = 32;

/// Digest length in bytes (stored hex-encoded)
const DIGEST_LEN: usize = 32;

/// Accounts seeded on first run. Documented defaults, expected to be changed
/// in real deployments.
const DEFAULT_ACCOUNTS: [(&str, &str, Role); 2] = [
    ("teacher", "123456", Role::Teacher),
    ("admin", "admin123", Role::Admin),
];

/// Store for persisted credential records and the theme preference.
///
/// Owns all hashing secrets: salts are generated here, persisted alongside
/// the digest, and never leave the store. The fail-closed operations
/// ([`verify_credentials`](Self::verify_credentials),
/// [`get_theme`](Self::get_theme), [`set_theme`](Self::set_theme)) never let
/// a raw storage error escape; failures collapse into the same result the
/// caller would see for a plain miss.
#[derive(Clone)]
pub struct CredentialStore {
    pool: SqlitePool,
}

impl CredentialStore {
    /// Create a new credential store over a shared connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create schema and seed default records. Idempotent: safe to run on
    /// every startup, and a concurrent double-run cannot fail on the
    /// unique-constrained inserts.
    ///
    /// Seeds `teacher/123456` and `admin/admin123` with fresh per-user
    /// salts, plus the singleton settings row with the light theme.
    ///
    /// # Errors
    ///
    /// * `AuthError::Database` - Schema creation failed
    pub async fn bootstrap(&self) -> AuthResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                salt TEXT NOT NULL,
                role TEXT NOT NULL CHECK (role IN ('teacher', 'admin'))
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS settings (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                theme TEXT NOT NULL DEFAULT 'light'
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("INSERT OR IGNORE INTO settings (id, theme) VALUES (1, ?)")
            .bind(Theme::Light.as_str())
            .execute(&self.pool)
            .await?;

        for (username, password, role) in DEFAULT_ACCOUNTS {
            let salt = Self::generate_salt();
            let password_hash = Self::hash_password(password, &salt);

            let inserted = sqlx::query(
                "INSERT INTO users (username, password_hash, salt, role)
                 VALUES (?, ?, ?, ?)
                 ON CONFLICT(username) DO NOTHING",
            )
            .bind(username)
            .bind(&password_hash)
            .bind(&salt)
            .bind(role.as_str())
            .execute(&self.pool)
            .await;

            match inserted {
                Ok(result) if result.rows_affected() > 0 => {
                    debug!("seeded default account '{username}'");
                }
                Ok(_) => {}
                // A racing bootstrap can still surface the unique
                // violation; it means the account already exists.
                Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {}
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    /// Derive the hex digest for a password and salt.
    ///
    /// PBKDF2-HMAC-SHA256 with 100_000 iterations; the salt enters the
    /// derivation as key-derivation input, not as material concatenated
    /// onto the password. Deterministic for a fixed `(password, salt)`.
    pub fn hash_password(password: &str, salt: &str) -> String {
        let mut digest = [0u8; DIGEST_LEN];
        pbkdf2_hmac::<Sha256>(
            password.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ITERATIONS,
            &mut digest,
        );
        hex::encode(digest)
    }

    /// Generate a fresh per-user salt from a CSPRNG, hex-encoded
    pub fn generate_salt() -> String {
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt);
        hex::encode(salt)
    }

    /// Verify a username/password pair.
    ///
    /// Returns `(true, Some(role))` on a match. An unknown username, a
    /// digest mismatch, and a storage failure all return `(false, None)`:
    /// the caller cannot distinguish them, which prevents username
    /// enumeration and fails closed when the store is unreachable.
    pub async fn verify_credentials(&self, username: &str, password: &str) -> (bool, Option<Role>) {
        match self.verify_inner(username, password).await {
            Ok(Some(role)) => (true, Some(role)),
            Ok(None) => (false, None),
            Err(e) => {
                warn!("credential verification unavailable: {e}");
                (false, None)
            }
        }
    }

    async fn verify_inner(&self, username: &str, password: &str) -> AuthResult<Option<Role>> {
        let row = sqlx::query("SELECT password_hash, salt, role FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let stored_hash: String = row.get("password_hash");
        let salt: String = row.get("salt");
        let role: String = row.get("role");

        let digest = Self::hash_password(password, &salt);

        // Timing-safe comparison; must not short-circuit on the first
        // mismatching byte.
        if bool::from(digest.as_bytes().ct_eq(stored_hash.as_bytes())) {
            Ok(Some(role.parse()?))
        } else {
            Ok(None)
        }
    }

    /// Read the theme preference, defaulting to light when the row is
    /// absent or the store is unreachable
    pub async fn get_theme(&self) -> Theme {
        match self.get_theme_inner().await {
            Ok(Some(name)) => Theme::from_name(&name),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("theme lookup failed, using default: {e}");
                Theme::default()
            }
        }
    }

    async fn get_theme_inner(&self) -> AuthResult<Option<String>> {
        let row = sqlx::query("SELECT theme FROM settings WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get("theme")))
    }

    /// Write the theme preference, coercing anything outside the permitted
    /// set to light. Returns whether the write succeeded.
    pub async fn set_theme(&self, theme: &str) -> bool {
        let theme = Theme::from_name(theme);

        let written = sqlx::query("UPDATE settings SET theme = ? WHERE id = 1")
            .bind(theme.as_str())
            .execute(&self.pool)
            .await;

        match written {
            Ok(_) => true,
            Err(e) => {
                warn!("theme update failed: {e}");
                false
            }
        }
    }
}
