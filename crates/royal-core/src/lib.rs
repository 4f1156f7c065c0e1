//! # royal-core: Pure Hotel Domain Logic for Royal Stay
//!
//! This crate is the **heart** of Royal Stay. It holds guests, rooms,
//! bookings, invoices, payments, loyalty points and guest interactions, with
//! no I/O beyond `tracing` events.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Royal Stay Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 royal-front-desk (CLI)                          │   │
//! │  │    config ──► logging ──► scripted scenarios ──► stdout        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ royal-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ front_desk│  │  booking  │  │  invoice  │  │  loyalty  │  │   │
//! │  │   │ registry  │  │ confirm/  │  │ compute/  │  │ add/      │  │   │
//! │  │   │ by id     │  │ cancel    │  │ finalize  │  │ redeem    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   guest · room · payment · interaction · money · validation    │   │
//! │  │                                                                 │   │
//! │  │   NO DATABASE • NO NETWORK • NO FILES                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`front_desk`] - Registry that owns every entity and resolves references
//! - [`booking`] - Booking state machine (confirm / cancel)
//! - [`invoice`] - Invoice totals and summaries
//! - [`loyalty`] - Loyalty point balance and tier
//! - [`guest`], [`room`], [`payment`], [`interaction`] - The other entities
//! - [`money`] - Money type with integer arithmetic
//! - [`types`] - Identifiers and status enums
//! - [`error`] - Domain error types
//! - [`validation`] - Input checks used by the strict booking policy
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use royal_core::{
//!     BookingId, BookingPolicy, FrontDesk, Guest, InvoiceId, LoyaltyProgram, Money, Room,
//!     RoomNumber,
//! };
//!
//! let mut desk = FrontDesk::new(BookingPolicy::Permissive);
//! let joe = desk
//!     .register_guest(
//!         Guest::new("Joe Biden", "joe@biden.com", "555-0202")
//!             .with_loyalty(LoyaltyProgram::new(300, "Silver")),
//!     )
//!     .unwrap();
//! desk.add_room(Room::new(RoomNumber(102), "Double", ["Wi-Fi", "TV"], Money::from_major_minor(200, 0)))
//!     .unwrap();
//!
//! let booking = desk
//!     .create_booking(
//!         BookingId(3),
//!         joe,
//!         RoomNumber(102),
//!         NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2025, 5, 3).unwrap(),
//!     )
//!     .unwrap();
//! desk.confirm_booking(booking).unwrap();
//!
//! desk.generate_invoice(InvoiceId(1002), booking).unwrap();
//! assert_eq!(desk.invoice(InvoiceId(1002)).unwrap().total(), Money::from_major_minor(400, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod booking;
pub mod error;
pub mod front_desk;
pub mod guest;
pub mod interaction;
pub mod invoice;
pub mod loyalty;
pub mod money;
pub mod payment;
pub mod room;
pub mod stay;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use booking::Booking;
pub use error::{CoreError, CoreResult, ValidationError};
pub use front_desk::FrontDesk;
pub use guest::Guest;
pub use interaction::GuestInteraction;
pub use invoice::Invoice;
pub use loyalty::LoyaltyProgram;
pub use money::Money;
pub use payment::{CreditCardPayment, Payment, PaymentInstrument, ProcessPayment};
pub use room::Room;
pub use stay::Stay;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tier given to a loyalty program created without one.
pub const DEFAULT_LOYALTY_TIER: &str = "Basic";

/// Longest guest name accepted under the strict policy.
pub const MAX_NAME_LENGTH: usize = 200;
