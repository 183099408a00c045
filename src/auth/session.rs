//! Auth session implementation.

use super::{
    models::{Role, User},
    store::CredentialStore,
};
use log::info;

/// In-memory authentication state for one running presentation layer.
///
/// A session is an explicit value owned by the caller, not ambient global
/// state: the presentation layer constructs one at startup, feeds login
/// attempts through [`authenticate`](Self::authenticate), and gates screens
/// and actions on the capability checks. Starts unauthenticated; only a
/// successful credential check transitions it.
pub struct AuthSession {
    store: CredentialStore,
    user: Option<User>,
}

impl AuthSession {
    /// Create a new, unauthenticated session over a credential store
    pub fn new(store: CredentialStore) -> Self {
        Self { store, user: None }
    }

    /// Attempt to authenticate with the provided credentials.
    ///
    /// A single synchronous attempt per call; re-prompting is the caller's
    /// job. On success the session holds the authenticated user and a
    /// reference to it is returned. On any failure — wrong password,
    /// unknown user, or store error, indistinguishable by design — the
    /// session is left unauthenticated and `None` is returned.
    pub async fn authenticate(&mut self, username: &str, password: &str) -> Option<&User> {
        let (ok, role) = self.store.verify_credentials(username, password).await;

        match (ok, role) {
            (true, Some(role)) => {
                info!("user '{username}' authenticated with role {role}");
                self.user = Some(User::authenticated(username, role));
                self.user.as_ref()
            }
            _ => {
                self.user = None;
                None
            }
        }
    }

    /// Discard any held authentication state
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("user '{}' logged out", user.username);
        }
    }

    /// Check if the session is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_authenticated)
    }

    /// Get the currently authenticated user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Check if the session can access admin features
    pub fn can_access_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::can_access_admin)
    }

    /// Check if the session can access teacher features.
    ///
    /// Admin role passes this check too; admin capability is a superset of
    /// teacher capability.
    pub fn can_access_teacher(&self) -> bool {
        self.user.as_ref().is_some_and(User::can_access_teacher)
    }

    /// Role of the currently authenticated user, if any
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}
