//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  └── CoreError        - Arithmetic domain errors                       │
//! │                                                                         │
//! │  tally-auth errors (separate crate)                                    │
//! │  └── AuthError        - Identity provider failures                     │
//! │                                                                         │
//! │  Flow: CoreError/AuthError → platform shell → user-facing message      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending dividend)
//! 3. Errors are enum variants, never String
//! 4. Recoverable by the caller - the shell ignores the keystroke and keeps
//!    the current display value

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain rule violations. They should be caught and
/// translated to user-friendly behavior by the presentation layer, never
/// allowed to crash the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Division by zero was requested.
    ///
    /// ## When This Occurs
    /// - The keypad feeds `a / 0` into the arithmetic engine
    ///
    /// ## User Workflow
    /// ```text
    /// Press [5] [÷] [0] [=]
    ///      │
    ///      ▼
    /// divide(5, 0)
    ///      │
    ///      ▼
    /// DivisionByZero { dividend: 5 }
    ///      │
    ///      ▼
    /// UI ignores the keystroke, display stays on "5"
    /// ```
    #[error("Cannot divide {dividend} by zero")]
    DivisionByZero { dividend: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
