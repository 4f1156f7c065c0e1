//! # Domain Types
//!
//! Identifiers and closed status enumerations shared by every entity.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Identifiers (u32 newtypes)      Status enums                           │
//! │  ──────────────────────────      ────────────────────────────────       │
//! │  GuestId      (desk-assigned)    BookingStatus     Pending              │
//! │  RoomNumber   (101, 102, ...)                      Confirmed            │
//! │  BookingId                                         Cancelled            │
//! │  InvoiceId                                                              │
//! │  PaymentId                       InteractionStatus Open / InProgress    │
//! │  InteractionId                                     Closed               │
//! │                                                                         │
//! │                                  InteractionKind   Feedback             │
//! │                                                    ServiceRequest       │
//! │                                                    Other(label)         │
//! │                                                                         │
//! │                                  BookingPolicy     Permissive / Strict  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Identifiers
// =============================================================================

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                $name(value)
            }
        }
    };
}

id_type!(
    /// Identifies a guest registered with a [`FrontDesk`](crate::FrontDesk).
    GuestId
);
id_type!(
    /// Room number, unique within a front desk.
    RoomNumber
);
id_type!(
    /// Identifies a booking.
    BookingId
);
id_type!(
    /// Identifies an invoice.
    InvoiceId
);
id_type!(
    /// Identifies a payment.
    PaymentId
);
id_type!(
    /// Identifies a guest interaction.
    InteractionId
);

// =============================================================================
// Booking Status
// =============================================================================

/// Lifecycle status of a booking.
///
/// Transitions are triggers, not guarded moves: confirming a cancelled
/// booking is allowed and so is cancelling a pending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Created, not yet confirmed.
    #[default]
    Pending,
    /// Confirmed; the room is marked unavailable.
    Confirmed,
    /// Cancelled; the room has been released.
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "Pending"),
            BookingStatus::Confirmed => write!(f, "Confirmed"),
            BookingStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

// =============================================================================
// Interaction Kind & Status
// =============================================================================

/// What a guest interaction is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// Comments on the stay.
    Feedback,
    /// A request for something to be done (towels, pillows, ...).
    ServiceRequest,
    /// Any other label.
    Other(String),
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionKind::Feedback => write!(f, "Feedback"),
            InteractionKind::ServiceRequest => write!(f, "ServiceRequest"),
            InteractionKind::Other(label) => write!(f, "{}", label),
        }
    }
}

impl FromStr for InteractionKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "feedback" => InteractionKind::Feedback,
            "servicerequest" | "service_request" | "service request" => {
                InteractionKind::ServiceRequest
            }
            _ => InteractionKind::Other(s.trim().to_string()),
        })
    }
}

/// Handling status of a guest interaction. No ordering is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl fmt::Display for InteractionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionStatus::Open => write!(f, "Open"),
            InteractionStatus::InProgress => write!(f, "InProgress"),
            InteractionStatus::Closed => write!(f, "Closed"),
        }
    }
}

// =============================================================================
// Booking Policy
// =============================================================================

/// How strictly the desk guards rooms and inputs.
///
/// ## Mode Comparison
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  PERMISSIVE (Default)               │  STRICT                          │
/// │  ────────────────────               │  ──────                          │
/// │  • confirm never checks the room    │  • confirm fails if another      │
/// │    (double-booking possible)        │    booking holds the room        │
/// │  • cancel always frees the room     │  • cancel frees only its own     │
/// │  • no input validation              │  • dates, price, contact checked │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingPolicy {
    #[default]
    Permissive,
    Strict,
}

impl BookingPolicy {
    /// Returns true when occupancy and input checks are enforced.
    pub fn is_strict(&self) -> bool {
        matches!(self, BookingPolicy::Strict)
    }
}

impl fmt::Display for BookingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingPolicy::Permissive => write!(f, "permissive"),
            BookingPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for BookingPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "permissive" | "lenient" => Ok(BookingPolicy::Permissive),
            "strict" => Ok(BookingPolicy::Strict),
            _ => Err(ValidationError::NotAllowed {
                field: "booking_policy".to_string(),
                allowed: vec!["permissive".to_string(), "strict".to_string()],
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
