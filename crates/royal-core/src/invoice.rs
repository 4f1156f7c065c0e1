//! # Invoice
//!
//! Billing summary for a booking.
//!
//! ## Compute vs. Commit
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_total(&stay)   pure: nights × price_per_night                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  finalize(total)        stores total + finalized_at                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  generate_invoice(&stay) = compute + finalize + formatted summary      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The total is read from the room at generation time, so a price change
//! between two calls produces a different total; the latest call wins.
//! Reversed stay dates yield a negative total and are not rejected here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::money::Money;
use crate::stay::Stay;
use crate::types::{BookingId, InvoiceId};

/// An invoice for one booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    invoice_id: InvoiceId,
    booking_id: BookingId,
    total: Money,
    finalized_at: Option<DateTime<Utc>>,
}

impl Invoice {
    /// Creates an invoice with a zero total.
    pub fn new(invoice_id: InvoiceId, booking_id: BookingId) -> Self {
        Invoice {
            invoice_id,
            booking_id,
            total: Money::zero(),
            finalized_at: None,
        }
    }

    /// Total for the stay without touching any invoice.
    pub fn compute_total(stay: &Stay<'_>) -> Money {
        stay.cost()
    }

    /// Commits `total` as the invoice amount and stamps the commit time.
    pub fn finalize(&mut self, total: Money) {
        self.total = total;
        self.finalized_at = Some(Utc::now());
    }

    /// Computes and commits the total, then renders the summary.
    pub fn generate_invoice(&mut self, stay: &Stay<'_>) -> String {
        debug_assert_eq!(stay.booking.booking_id(), self.booking_id);

        let total = Self::compute_total(stay);
        self.finalize(total);
        info!(
            invoice_id = %self.invoice_id,
            booking_id = %self.booking_id,
            nights = stay.booking.nights(),
            total = %total,
            "Invoice generated"
        );

        self.summary(stay)
    }

    /// Multi-line summary using the currently stored total.
    pub fn summary(&self, stay: &Stay<'_>) -> String {
        format!(
            "Invoice #{}\n\
             Booking ID: {}\n\
             Guest: {}\n\
             Room: {}\n\
             Check-In: {}\n\
             Check-Out: {}\n\
             Total Due: {}\n",
            self.invoice_id,
            stay.booking.booking_id(),
            stay.guest.name(),
            stay.room.room_number(),
            stay.booking.check_in(),
            stay.booking.check_out(),
            self.total
        )
    }

    pub fn invoice_id(&self) -> InvoiceId {
        self.invoice_id
    }

    pub fn booking_id(&self) -> BookingId {
        self.booking_id
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Overrides the stored total. Does not stamp `finalized_at`.
    pub fn set_total(&mut self, total: Money) {
        self.total = total;
    }

    /// When the current total was last committed by [`Invoice::finalize`].
    pub fn finalized_at(&self) -> Option<DateTime<Utc>> {
        self.finalized_at
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized_at.is_some()
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invoice #{} for Booking #{}",
            self.invoice_id, self.booking_id
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
