//! # Auth State Manager
//!
//! Holds the observable authentication state and drives login/logout.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Auth State Transitions                              │
//! │                                                                         │
//! │                      login(credential) succeeds                         │
//! │  ┌─────────────────┐ ──────────────────────────► ┌──────────────────┐  │
//! │  │ Unauthenticated │                             │ Authenticated(U) │  │
//! │  └─────────────────┘ ◄────────────────────────── └──────────────────┘  │
//! │                          logout() succeeds                              │
//! │                                                                         │
//! │  NO OTHER TRANSITIONS:                                                  │
//! │  ─────────────────────                                                  │
//! │  • Failed login/logout   → state untouched, error to caller            │
//! │  • Cancelled operation   → state untouched (same as failure)           │
//! │  • Token refresh         → handled opaquely by the provider            │
//! │                                                                         │
//! │  OBSERVERS:                                                             │
//! │  ──────────                                                             │
//! │  • watch channel: value replaced atomically, then subscribers woken    │
//! │  • late subscribers get the current snapshot, not missed history       │
//! │  • identical replacement states are not re-notified                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why No Global Singleton?
//! The manager is an explicitly constructed service instance: the shell
//! builds one, injects the provider, and passes the handle down. Tests get
//! a fake provider the same way.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{info, warn};

use tally_core::User;

use crate::error::AuthResult;
use crate::provider::{Credential, IdentityProvider};

// =============================================================================
// Auth State
// =============================================================================

/// The current authentication state.
///
/// Exactly one holder per manager. The value is replaced wholesale on every
/// transition - observers never see a torn state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "user", rename_all = "camelCase")]
pub enum AuthState {
    /// A user is signed in.
    Authenticated(User),
    /// No user is signed in.
    Unauthenticated,
}

impl AuthState {
    /// Returns the signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            AuthState::Unauthenticated => None,
        }
    }

    /// Returns true if a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

// =============================================================================
// Auth Manager
// =============================================================================

/// Mediates between the identity provider and the rest of the application.
///
/// ## Concurrency
/// The watch channel is the single owner of the state value. Login and
/// logout each perform at most one provider round trip and publish the new
/// state in one atomic replace; concurrent calls are serialized by the
/// backend's own session semantics, not by this manager.
pub struct AuthManager {
    /// The injected identity backend.
    provider: Arc<dyn IdentityProvider>,
    /// State holder and broadcaster.
    state_tx: watch::Sender<AuthState>,
}

impl AuthManager {
    /// Creates a manager, initializing state from any existing provider
    /// session.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let initial = match provider.current_session() {
            Some(profile) => {
                let user = User::from(profile);
                info!(user_id = %user.id, "Restored existing session");
                AuthState::Authenticated(user)
            }
            None => AuthState::Unauthenticated,
        };

        let (state_tx, _) = watch::channel(initial);

        AuthManager { provider, state_tx }
    }

    /// Exchanges a sign-in credential for a session and publishes
    /// `Authenticated` on success.
    ///
    /// ## Errors
    /// On any provider failure the error is returned to the caller and the
    /// state is left untouched. Dropping the future before the exchange
    /// completes also leaves the state untouched.
    pub async fn login(&self, credential: Credential) -> AuthResult<User> {
        let profile = match self.provider.exchange_credential(&credential).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(?e, "Credential exchange failed");
                return Err(e);
            }
        };

        let user = User::from(profile);
        info!(user_id = %user.id, "Signed in");
        self.publish(AuthState::Authenticated(user.clone()));

        Ok(user)
    }

    /// Terminates the backend session and publishes `Unauthenticated` on
    /// success.
    ///
    /// ## Errors
    /// On provider failure the error is returned and the state is left
    /// untouched.
    pub async fn logout(&self) -> AuthResult<()> {
        if let Err(e) = self.provider.sign_out().await {
            warn!(?e, "Sign-out failed");
            return Err(e);
        }

        info!("Signed out");
        self.publish(AuthState::Unauthenticated);

        Ok(())
    }

    /// Returns a snapshot of the signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.state_tx.borrow().user().cloned()
    }

    /// Returns true if a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state_tx.borrow().is_authenticated()
    }

    /// Returns a snapshot of the full auth state.
    pub fn state(&self) -> AuthState {
        self.state_tx.borrow().clone()
    }

    /// Subscribes to state transitions.
    ///
    /// The receiver starts at the current snapshot; each transition wakes
    /// all subscribers. Missed intermediate values are not buffered.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }

    /// Atomically replaces the state and notifies observers.
    ///
    /// Publishing the value the holder already contains is a no-op so
    /// observers are only woken by real transitions.
    fn publish(&self, next: AuthState) {
        self.state_tx.send_if_modified(|state| {
            if *state == next {
                false
            } else {
                *state = next;
                true
            }
        });
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
