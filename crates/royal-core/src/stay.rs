//! Borrowed view of a booking together with the guest and room it refers to.

use crate::booking::Booking;
use crate::guest::Guest;
use crate::money::Money;
use crate::room::Room;

/// A booking resolved against its guest and room.
///
/// Usually obtained from [`FrontDesk::stay`](crate::FrontDesk::stay).
#[derive(Debug, Clone, Copy)]
pub struct Stay<'a> {
    pub booking: &'a Booking,
    pub guest: &'a Guest,
    pub room: &'a Room,
}

impl<'a> Stay<'a> {
    pub fn new(booking: &'a Booking, guest: &'a Guest, room: &'a Room) -> Self {
        Stay {
            booking,
            guest,
            room,
        }
    }

    /// Nights × current nightly price of the room.
    pub fn cost(&self) -> Money {
        self.room.price_per_night().multiply_nights(self.booking.nights())
    }
}
