//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains all shared business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Platform Shells (Android / iOS)                │   │
//! │  │    Keypad UI ──► Display ──► Login Screen ──► Avatar Bar        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ FFI / IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐        ┌───────────┐        ┌───────────┐      │   │
//! │  │   │   arith   │        │   types   │        │   error   │      │   │
//! │  │   │ add, sub  │        │   User    │        │ CoreError │      │   │
//! │  │   │ mul, div  │        │ Operation │        │  DivByZero│      │   │
//! │  │   └───────────┘        └───────────┘        └───────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  tally-auth (Auth State Manager)                │   │
//! │  │         Identity provider seam, observable auth state           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`arith`] - Integer arithmetic engine (wrapping semantics, no floats)
//! - [`types`] - Domain types (User, Operation)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, provider SDK access is FORBIDDEN here
//! 3. **One Integer Width**: All arithmetic is i64 with defined wraparound
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::arith;
//! use tally_core::Operation;
//!
//! assert_eq!(arith::add(2, 2), 4);
//!
//! // Division by zero is a typed, recoverable error
//! assert!(arith::divide(5, 0).is_err());
//!
//! // Keypad operators dispatch through the Operation enum
//! assert_eq!(Operation::Multiply.apply(-3, 4).unwrap(), -12);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod arith;
pub mod error;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::User` instead of
// `use tally_core::types::User`

pub use error::{CoreError, CoreResult};
pub use types::{Operation, User};
