//! # Error Types
//!
//! Domain-specific error types for royal-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  royal-core errors (this file)                                         │
//! │  ├── CoreError        - Domain outcomes and lookup failures            │
//! │  └── ValidationError  - Input validation failures (strict policy)      │
//! │                                                                         │
//! │  front-desk errors (separate crate)                                    │
//! │  ├── ConfigError      - Config file / environment problems             │
//! │  └── AppError         - What the binary reports                        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Severity
//! Not every variant is fatal. `InsufficientPoints` is a declined request:
//! the caller logs it and carries on. `PaymentNotImplemented` is a
//! programming error and should never be swallowed.

use thiserror::Error;

use crate::types::{BookingId, GuestId, InteractionId, InvoiceId, PaymentId, RoomNumber};

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No guest registered under this id.
    #[error("Guest not found: {0}")]
    GuestNotFound(GuestId),

    /// No room registered under this number.
    #[error("Room not found: {0}")]
    RoomNotFound(RoomNumber),

    /// No booking registered under this id.
    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    /// No invoice registered under this id.
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(InvoiceId),

    /// No interaction registered under this id.
    #[error("Interaction not found: {0}")]
    InteractionNotFound(InteractionId),

    /// Loyalty redemption larger than the balance.
    ///
    /// ## User Workflow
    /// ```text
    /// redeem(10000)
    ///      │
    ///      ▼
    /// Check balance: available=500
    ///      │
    ///      ▼
    /// InsufficientPoints { available: 500, requested: 10000 }
    ///      │
    ///      ▼
    /// Balance untouched, caller proceeds
    /// ```
    #[error("Not enough points to redeem: available {available}, requested {requested}")]
    InsufficientPoints { available: u64, requested: u64 },

    /// Room is held by another booking (strict policy only).
    #[error("Room {room_number} is already occupied by booking {occupied_by}")]
    RoomOccupied {
        room_number: RoomNumber,
        occupied_by: BookingId,
    },

    /// A payment without a concrete processor was asked to process itself.
    #[error("Payment {payment_id} ({method}) has no processor; use a concrete payment type")]
    PaymentNotImplemented { payment_id: PaymentId, method: String },

    /// The guest has no loyalty program attached.
    #[error("Guest {0} has no loyalty program")]
    NoLoyaltyProgram(GuestId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true for outcomes the caller is expected to absorb and move on.
    pub fn is_declined(&self) -> bool {
        matches!(
            self,
            CoreError::InsufficientPoints { .. } | CoreError::RoomOccupied { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only raised under [`BookingPolicy::Strict`](crate::types::BookingPolicy),
/// apart from `Duplicate` which protects the desk's registries.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Check-out is not after check-in.
    #[error("check_out ({check_out}) must be after check_in ({check_in})")]
    InvalidDateRange {
        check_in: chrono::NaiveDate,
        check_out: chrono::NaiveDate,
    },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., duplicate room number).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientPoints {
            available: 500,
            requested: 10000,
        };
        assert_eq!(
            err.to_string(),
            "Not enough points to redeem: available 500, requested 10000"
        );

        let err = CoreError::RoomOccupied {
            room_number: RoomNumber(101),
            occupied_by: BookingId(1),
        };
        assert_eq!(err.to_string(), "Room 101 is already occupied by booking 1");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "room_number".to_string(),
            value: "101".to_string(),
        };
        assert_eq!(err.to_string(), "room_number '101' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_declined_outcomes() {
        let declined = CoreError::InsufficientPoints {
            available: 1,
            requested: 2,
        };
        assert!(declined.is_declined());

        let fatal = CoreError::PaymentNotImplemented {
            payment_id: PaymentId(5001),
            method: "Cash".to_string(),
        };
        assert!(!fatal.is_declined());
    }
}
