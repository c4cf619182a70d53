//! # Identity Provider Seam
//!
//! The trait boundary between tally-auth and the external identity backend.
//!
//! ## Credential Exchange Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Credential Exchange Flow                            │
//! │                                                                         │
//! │  ┌────────────────┐     ┌─────────────────┐     ┌─────────────────┐    │
//! │  │ Platform shell │     │  AuthManager    │     │ Identity backend│    │
//! │  │ (sign-in UI)   │     │  (this crate)   │     │ (external SDK)  │    │
//! │  └───────┬────────┘     └────────┬────────┘     └────────┬────────┘    │
//! │          │                       │                       │             │
//! │          │  1. Sign-in flow      │                       │             │
//! │          │     yields id_token   │                       │             │
//! │          │──────────────────────►│                       │             │
//! │          │                       │  2. exchange_         │             │
//! │          │                       │     credential(token) │             │
//! │          │                       │──────────────────────►│             │
//! │          │                       │  3. UserProfile       │             │
//! │          │                       │◄──────────────────────│             │
//! │          │  4. Authenticated     │                       │             │
//! │          │     (watch notify)    │                       │             │
//! │          │◄──────────────────────│                       │             │
//! │          │                       │                       │             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Token Opacity
//! The tokens inside [`Credential`] are opaque strings. They are minted by a
//! platform-specific sign-in flow and only ever forwarded to the backend;
//! this crate never inspects or validates them.

use async_trait::async_trait;
use tally_core::User;

use crate::error::AuthResult;

// =============================================================================
// Credential
// =============================================================================

/// An opaque proof of identity obtained from a platform sign-in flow.
///
/// The primary `id_token` is always required; some providers additionally
/// hand back an access token, which is forwarded when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Primary identity token from the sign-in flow.
    pub id_token: String,
    /// Optional secondary token, forwarded verbatim when present.
    pub access_token: Option<String>,
}

impl Credential {
    /// Creates a credential from the primary token alone.
    pub fn new(id_token: impl Into<String>) -> Self {
        Credential {
            id_token: id_token.into(),
            access_token: None,
        }
    }

    /// Attaches the optional secondary token.
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }
}

// =============================================================================
// User Profile
// =============================================================================

/// The raw profile record returned by the identity backend.
///
/// Field names follow the backend's vocabulary (`subject` for the unique
/// id); the manager maps this into the domain [`User`] type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Backend-assigned unique subject identifier.
    pub subject: String,
    /// Display name, if the backend shared one.
    pub display_name: Option<String>,
    /// Email address, if the backend shared one.
    pub email: Option<String>,
    /// Avatar URL, if the backend shared one.
    pub photo_url: Option<String>,
}

impl UserProfile {
    /// Creates a profile with only the required subject id.
    pub fn new(subject: impl Into<String>) -> Self {
        UserProfile {
            subject: subject.into(),
            display_name: None,
            email: None,
            photo_url: None,
        }
    }
}

/// Maps a backend profile into the domain user record.
///
/// Each optional field defaults to absent when the backend omits it.
impl From<UserProfile> for User {
    fn from(profile: UserProfile) -> Self {
        User {
            id: profile.subject,
            name: profile.display_name,
            email: profile.email,
            photo_url: profile.photo_url,
        }
    }
}

// =============================================================================
// Identity Provider Trait
// =============================================================================

/// The three backend operations tally-auth depends on.
///
/// The real implementation wraps the platform's identity SDK and lives in
/// the shell; tests inject a fake. Session persistence belongs entirely to
/// the implementation - this crate never stores tokens.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the already-valid session, if the provider restored one.
    ///
    /// Synchronous by design: provider SDKs expose the cached session as a
    /// plain property, and the manager needs it at construction time.
    fn current_session(&self) -> Option<UserProfile>;

    /// Exchanges a credential for a backend session and profile.
    ///
    /// At most one round trip. Errors carry the backend's cause and leave
    /// no session behind.
    async fn exchange_credential(&self, credential: &Credential) -> AuthResult<UserProfile>;

    /// Terminates the backend session.
    async fn sign_out(&self) -> AuthResult<()>;
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_builder() {
        let bare = Credential::new("id-token");
        assert_eq!(bare.id_token, "id-token");
        assert!(bare.access_token.is_none());

        let paired = Credential::new("id-token").with_access_token("access-token");
        assert_eq!(paired.access_token.as_deref(), Some("access-token"));
    }

    #[test]
    fn test_profile_maps_to_user() {
        let profile = UserProfile {
            subject: "uid-42".to_string(),
            display_name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            photo_url: None,
        };

        let user: User = profile.into();
        assert_eq!(user.id, "uid-42");
        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
        assert!(user.photo_url.is_none());
    }

    #[test]
    fn test_sparse_profile_maps_to_sparse_user() {
        let user: User = UserProfile::new("uid-42").into();
        assert_eq!(user.id, "uid-42");
        assert!(user.name.is_none());
        assert!(user.email.is_none());
        assert!(user.photo_url.is_none());
    }
}
