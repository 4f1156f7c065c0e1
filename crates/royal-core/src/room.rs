//! # Room
//!
//! Static room attributes plus the mutable availability flag.
//!
//! Availability is meant to change only through booking transitions
//! ([`Booking::confirm`](crate::Booking::confirm) and
//! [`Booking::cancel`](crate::Booking::cancel)). `set_availability` stays
//! public for callers that manage rooms outside of a booking.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::types::{BookingId, RoomNumber};

/// A hotel room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    room_number: RoomNumber,
    room_type: String,
    amenities: Vec<String>,
    price_per_night: Money,
    is_available: bool,
    /// Booking currently holding the room. Only maintained under the strict policy.
    occupied_by: Option<BookingId>,
}

impl Room {
    /// Creates an available room.
    pub fn new<I, S>(
        room_number: RoomNumber,
        room_type: impl Into<String>,
        amenities: I,
        price_per_night: Money,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Room {
            room_number,
            room_type: room_type.into(),
            amenities: amenities.into_iter().map(Into::into).collect(),
            price_per_night,
            is_available: true,
            occupied_by: None,
        }
    }

    pub fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }

    pub fn price_per_night(&self) -> Money {
        self.price_per_night
    }

    pub fn set_price_per_night(&mut self, price: Money) {
        self.price_per_night = price;
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn set_availability(&mut self, available: bool) {
        self.is_available = available;
    }

    /// Booking recorded as holding this room, if any.
    pub fn occupied_by(&self) -> Option<BookingId> {
        self.occupied_by
    }

    pub(crate) fn set_occupant(&mut self, booking: Option<BookingId>) {
        self.occupied_by = booking;
    }

    /// One-line summary of the room.
    pub fn details(&self) -> String {
        format!(
            "Room {} [{}] - Amenities: {} - Price/Night: {} - Available: {}",
            self.room_number,
            self.room_type,
            self.amenities.join(", "),
            self.price_per_night,
            self.is_available
        )
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details())
    }
}
