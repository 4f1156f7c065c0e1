//! # Booking
//!
//! A reservation of one room by one guest for a date range.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Pending ──confirm──► Confirmed ──cancel──► Cancelled                  │
//! │      │                    ▲                      │                      │
//! │      │                    └──────confirm─────────┘                      │
//! │      └───────────────cancel─────────────────────►                       │
//! │                                                                         │
//! │   confirm: status = Confirmed, room unavailable                         │
//! │   cancel:  status = Cancelled, room available                           │
//! │                                                                         │
//! │   No transition is guarded by the current status. Calling either one   │
//! │   again re-applies its side effect.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Room Occupancy
//! Under [`BookingPolicy::Permissive`] the room flag is flipped blindly, so
//! two bookings on one room both confirm, and cancelling either frees the
//! room even while the other is still confirmed. [`BookingPolicy::Strict`]
//! records the confirming booking on the room: confirm fails if another
//! booking holds it, cancel only frees a room this booking holds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::room::Room;
use crate::types::{BookingId, BookingPolicy, BookingStatus, GuestId, RoomNumber};

/// A reservation linking a guest, a room and a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    booking_id: BookingId,
    guest_id: GuestId,
    room_number: RoomNumber,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: BookingStatus,
}

impl Booking {
    /// Creates a pending booking. Dates are not checked here.
    pub fn new(
        booking_id: BookingId,
        guest_id: GuestId,
        room_number: RoomNumber,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Booking {
            booking_id,
            guest_id,
            room_number,
            check_in,
            check_out,
            status: BookingStatus::Pending,
        }
    }

    /// Confirms the booking and marks `room` unavailable.
    ///
    /// Under the strict policy this fails with [`CoreError::RoomOccupied`]
    /// when a different booking holds the room; nothing changes in that case.
    pub fn confirm(&mut self, room: &mut Room, policy: BookingPolicy) -> CoreResult<()> {
        debug_assert_eq!(room.room_number(), self.room_number);

        if policy.is_strict() {
            if let Some(holder) = room.occupied_by().filter(|holder| *holder != self.booking_id) {
                warn!(
                    booking_id = %self.booking_id,
                    room = %self.room_number,
                    occupied_by = %holder,
                    "Refusing to double-book room"
                );
                return Err(CoreError::RoomOccupied {
                    room_number: self.room_number,
                    occupied_by: holder,
                });
            }
            room.set_occupant(Some(self.booking_id));
        }

        self.status = BookingStatus::Confirmed;
        room.set_availability(false);
        info!(booking_id = %self.booking_id, room = %self.room_number, "Booking confirmed");
        Ok(())
    }

    /// Cancels the booking and releases `room`.
    ///
    /// Permissive: the room is always marked available. Strict: the room is
    /// released only if this booking holds it.
    pub fn cancel(&mut self, room: &mut Room, policy: BookingPolicy) {
        debug_assert_eq!(room.room_number(), self.room_number);

        self.status = BookingStatus::Cancelled;

        if !policy.is_strict() {
            room.set_availability(true);
        } else if room.occupied_by() == Some(self.booking_id) {
            room.set_occupant(None);
            room.set_availability(true);
        } else {
            debug!(
                booking_id = %self.booking_id,
                room = %self.room_number,
                occupied_by = ?room.occupied_by(),
                "Booking does not hold the room, leaving it untouched"
            );
        }

        info!(booking_id = %self.booking_id, room = %self.room_number, "Booking cancelled");
    }

    /// Number of nights, `check_out - check_in` in whole days.
    ///
    /// Zero or negative for degenerate or reversed ranges.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn booking_id(&self) -> BookingId {
        self.booking_id
    }

    pub fn guest_id(&self) -> GuestId {
        self.guest_id
    }

    pub fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    /// Overrides the status without touching the room.
    pub fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking #{} | Guest: {} | Room: {} | Status: {}",
            self.booking_id, self.guest_id, self.room_number, self.status
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
