//! # tally-auth: Auth State Manager for Tally
//!
//! This crate wraps an external identity provider behind a small service
//! that the platform shells observe to decide which screen to show.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Auth Layer                                 │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tally-auth (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────┐  │   │
//! │  │  │ AuthManager  │  │ AuthState    │  │ IdentityProvider     │  │   │
//! │  │  │ (manager.rs) │  │ (observable) │  │ (provider.rs, trait) │  │   │
//! │  │  │              │  │              │  │                      │  │   │
//! │  │  │ login/logout │◄─│ watch chan   │  │ exchange_credential  │  │   │
//! │  │  │ snapshot     │  │ atomic swap  │◄─│ sign_out             │  │   │
//! │  │  │ reads        │  │ + notify     │  │ current_session      │  │   │
//! │  │  └──────────────┘  └──────────────┘  └──────────────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  DEPENDENCIES:                                                         │
//! │  • tally-core: the User domain type                                    │
//! │  • the real provider implementation lives in the platform shell        │
//! │    (SDK wrapper) and is injected at construction                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tally_auth::{AuthManager, Credential};
//!
//! let manager = AuthManager::new(Arc::new(FirebaseProvider::new(...)));
//!
//! // Shell subscribes before rendering
//! let mut state_rx = manager.subscribe();
//!
//! // Sign-in flow hands us an opaque token pair
//! manager.login(Credential::new(id_token)).await?;
//! assert!(manager.is_authenticated());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod manager;
pub mod provider;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{AuthError, AuthResult};
pub use manager::{AuthManager, AuthState};
pub use provider::{Credential, IdentityProvider, UserProfile};
