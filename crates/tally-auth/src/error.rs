//! # Error Types
//!
//! Identity provider failures surfaced by tally-auth.
//!
//! ## Design Principles
//! 1. Every variant carries the underlying provider cause as context
//! 2. Errors are recoverable: the shell reverts its loading indicator and
//!    the auth state is guaranteed untouched
//! 3. No retries happen here; retry policy belongs to the shells

use thiserror::Error;

// =============================================================================
// Auth Error
// =============================================================================

/// Failures reported by the identity provider.
///
/// The auth state is never mutated when one of these is returned - callers
/// can always trust the pre-call snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The identity backend could not be reached.
    #[error("Network error reaching identity backend: {0}")]
    Network(String),

    /// The presented credential was rejected as invalid or expired.
    ///
    /// ## When This Occurs
    /// - The id token expired between the sign-in flow and the exchange
    /// - The token was issued for a different backend project
    #[error("Invalid or expired credential: {0}")]
    InvalidCredential(String),

    /// The backend refused the request for any other reason.
    #[error("Identity backend rejected the request: {0}")]
    Rejected(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with AuthError.
pub type AuthResult<T> = Result<T, AuthError>;

// =============================================================================
// Unit Tests
// =============================================================================
