//! # Domain Types
//!
//! Core domain types shared by every Tally platform shell.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐           ┌─────────────────┐                     │
//! │  │      User       │           │    Operation    │                     │
//! │  │  ─────────────  │           │  ─────────────  │                     │
//! │  │  id (subject)   │           │  Add            │                     │
//! │  │  name?          │           │  Subtract       │                     │
//! │  │  email?         │           │  Multiply       │                     │
//! │  │  photo_url?     │           │  Divide         │                     │
//! │  └─────────────────┘           └─────────────────┘                     │
//! │                                                                         │
//! │  User is an immutable snapshot - replaced wholesale on every auth      │
//! │  transition, never field-by-field.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::arith;
use crate::error::CoreResult;

// =============================================================================
// User
// =============================================================================

/// A signed-in user, as reported by the identity provider.
///
/// ## Design Notes
/// - `id` is the provider-assigned subject identifier, never generated here
/// - Every other field is optional: the provider may omit any of them
/// - Values are immutable snapshots; auth transitions replace the whole
///   record rather than mutating fields in place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Provider-assigned unique subject identifier.
    pub id: String,

    /// Display name, if the provider shared one.
    pub name: Option<String>,

    /// Email address, if the provider shared one.
    pub email: Option<String>,

    /// Avatar URL, if the provider shared one.
    pub photo_url: Option<String>,
}

impl User {
    /// Creates a user with only the required subject id.
    pub fn new(id: impl Into<String>) -> Self {
        User {
            id: id.into(),
            name: None,
            email: None,
            photo_url: None,
        }
    }
}

// =============================================================================
// Operation
// =============================================================================

/// A keypad operator, dispatched to the arithmetic engine.
///
/// Closed enumeration: the calculator has exactly four operators and the
/// shells translate button labels into these variants before calling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Applies this operation to two operands.
    ///
    /// Only [`Operation::Divide`] can fail (division by zero); the other
    /// three are total.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Operation;
    ///
    /// assert_eq!(Operation::Add.apply(2, 2).unwrap(), 4);
    /// assert!(Operation::Divide.apply(1, 0).is_err());
    /// ```
    pub fn apply(self, a: i64, b: i64) -> CoreResult<i64> {
        match self {
            Operation::Add => Ok(arith::add(a, b)),
            Operation::Subtract => Ok(arith::subtract(a, b)),
            Operation::Multiply => Ok(arith::multiply(a, b)),
            Operation::Divide => arith::divide(a, b),
        }
    }
}

/// Display shows the conventional operator symbol (for logs and debugging).
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "+"),
            Operation::Subtract => write!(f, "-"),
            Operation::Multiply => write!(f, "*"),
            Operation::Divide => write!(f, "/"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
