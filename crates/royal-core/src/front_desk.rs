//! # Front Desk
//!
//! In-memory registry that owns every guest, room, booking, invoice and
//! interaction and resolves the id references between them.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            FrontDesk                                    │
//! │                                                                         │
//! │  guests:       GuestId       → Guest ── owns Option<LoyaltyProgram>     │
//! │  rooms:        RoomNumber    → Room                                     │
//! │  bookings:     BookingId     → Booking { guest_id, room_number }        │
//! │  invoices:     InvoiceId     → Invoice { booking_id }                   │
//! │  interactions: InteractionId → GuestInteraction { guest_id }            │
//! │                                                                         │
//! │  confirm_booking(id):  bookings[id] + rooms[booking.room_number]        │
//! │  generate_invoice:     Stay { booking, guest, room } → Invoice          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entities point at each other by id; the desk lends out the values. The
//! [`BookingPolicy`] chosen at construction decides whether occupancy and
//! input checks run.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::booking::Booking;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::guest::Guest;
use crate::interaction::GuestInteraction;
use crate::invoice::Invoice;
use crate::room::Room;
use crate::stay::Stay;
use crate::types::{BookingId, BookingPolicy, GuestId, InteractionId, InvoiceId, RoomNumber};
use crate::validation;

/// The hotel's in-memory front desk.
#[derive(Debug, Default)]
pub struct FrontDesk {
    policy: BookingPolicy,
    guests: BTreeMap<GuestId, Guest>,
    rooms: BTreeMap<RoomNumber, Room>,
    bookings: BTreeMap<BookingId, Booking>,
    invoices: BTreeMap<InvoiceId, Invoice>,
    interactions: BTreeMap<InteractionId, GuestInteraction>,
    next_guest_id: u32,
}

fn duplicate(field: &str, value: impl ToString) -> CoreError {
    ValidationError::Duplicate {
        field: field.to_string(),
        value: value.to_string(),
    }
    .into()
}

impl FrontDesk {
    pub fn new(policy: BookingPolicy) -> Self {
        FrontDesk {
            policy,
            ..Default::default()
        }
    }

    pub fn policy(&self) -> BookingPolicy {
        self.policy
    }

    // =========================================================================
    // Guests
    // =========================================================================

    /// Registers a guest and creates their account.
    pub fn register_guest(&mut self, guest: Guest) -> CoreResult<GuestId> {
        if self.policy.is_strict() {
            validation::validate_guest_name(guest.name())?;
            validation::validate_email(guest.email())?;
        }

        self.next_guest_id += 1;
        let guest_id = GuestId(self.next_guest_id);
        info!(
            guest_id = %guest_id,
            name = guest.name(),
            email = guest.email(),
            "Account created"
        );
        self.guests.insert(guest_id, guest);
        Ok(guest_id)
    }

    pub fn guest(&self, guest_id: GuestId) -> CoreResult<&Guest> {
        self.guests
            .get(&guest_id)
            .ok_or(CoreError::GuestNotFound(guest_id))
    }

    pub fn guest_mut(&mut self, guest_id: GuestId) -> CoreResult<&mut Guest> {
        self.guests
            .get_mut(&guest_id)
            .ok_or(CoreError::GuestNotFound(guest_id))
    }

    /// Adds points to the guest's loyalty program.
    pub fn add_loyalty_points(&mut self, guest_id: GuestId, amount: u64) -> CoreResult<u64> {
        let program = self
            .guest_mut(guest_id)?
            .loyalty_program_mut()
            .ok_or(CoreError::NoLoyaltyProgram(guest_id))?;
        program.add_points(amount);
        Ok(program.points())
    }

    /// Redeems points from the guest's loyalty program.
    ///
    /// A redemption larger than the balance comes back as
    /// [`CoreError::InsufficientPoints`] with the balance unchanged.
    pub fn redeem_loyalty_points(&mut self, guest_id: GuestId, amount: u64) -> CoreResult<u64> {
        self.guest_mut(guest_id)?
            .loyalty_program_mut()
            .ok_or(CoreError::NoLoyaltyProgram(guest_id))?
            .redeem(amount)
    }

    /// Bookings made by the guest, in booking id order.
    pub fn booking_history(&self, guest_id: GuestId) -> CoreResult<Vec<&Booking>> {
        let guest = self.guest(guest_id)?;
        let history: Vec<&Booking> = self
            .bookings
            .values()
            .filter(|booking| booking.guest_id() == guest_id)
            .collect();

        info!(
            guest = guest.name(),
            bookings = history.len(),
            "Displaying booking history"
        );
        Ok(history)
    }

    // =========================================================================
    // Rooms
    // =========================================================================

    /// Adds a room to the inventory. Room numbers must be unique.
    pub fn add_room(&mut self, room: Room) -> CoreResult<RoomNumber> {
        let room_number = room.room_number();
        if self.rooms.contains_key(&room_number) {
            return Err(duplicate("room_number", room_number));
        }
        if self.policy.is_strict() {
            validation::validate_price(room.price_per_night())?;
        }

        debug!(room = %room_number, "Room added");
        self.rooms.insert(room_number, room);
        Ok(room_number)
    }

    pub fn room(&self, room_number: RoomNumber) -> CoreResult<&Room> {
        self.rooms
            .get(&room_number)
            .ok_or(CoreError::RoomNotFound(room_number))
    }

    pub fn room_mut(&mut self, room_number: RoomNumber) -> CoreResult<&mut Room> {
        self.rooms
            .get_mut(&room_number)
            .ok_or(CoreError::RoomNotFound(room_number))
    }

    // =========================================================================
    // Bookings
    // =========================================================================

    /// Creates a pending booking for a registered guest and room.
    pub fn create_booking(
        &mut self,
        booking_id: BookingId,
        guest_id: GuestId,
        room_number: RoomNumber,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> CoreResult<BookingId> {
        self.guest(guest_id)?;
        self.room(room_number)?;
        if self.bookings.contains_key(&booking_id) {
            return Err(duplicate("booking_id", booking_id));
        }
        if self.policy.is_strict() {
            validation::validate_stay_dates(check_in, check_out)?;
        }

        let booking = Booking::new(booking_id, guest_id, room_number, check_in, check_out);
        debug!(booking_id = %booking_id, nights = booking.nights(), "Booking created");
        self.bookings.insert(booking_id, booking);
        Ok(booking_id)
    }

    pub fn booking(&self, booking_id: BookingId) -> CoreResult<&Booking> {
        self.bookings
            .get(&booking_id)
            .ok_or(CoreError::BookingNotFound(booking_id))
    }

    /// Confirms a booking and marks its room unavailable.
    pub fn confirm_booking(&mut self, booking_id: BookingId) -> CoreResult<()> {
        let booking = self
            .bookings
            .get_mut(&booking_id)
            .ok_or(CoreError::BookingNotFound(booking_id))?;
        let room = self
            .rooms
            .get_mut(&booking.room_number())
            .ok_or(CoreError::RoomNotFound(booking.room_number()))?;

        booking.confirm(room, self.policy)
    }

    /// Cancels a booking and releases its room according to the policy.
    pub fn cancel_booking(&mut self, booking_id: BookingId) -> CoreResult<()> {
        let booking = self
            .bookings
            .get_mut(&booking_id)
            .ok_or(CoreError::BookingNotFound(booking_id))?;
        let room = self
            .rooms
            .get_mut(&booking.room_number())
            .ok_or(CoreError::RoomNotFound(booking.room_number()))?;

        booking.cancel(room, self.policy);
        Ok(())
    }

    /// Resolves a booking against its guest and room.
    pub fn stay(&self, booking_id: BookingId) -> CoreResult<Stay<'_>> {
        resolve_stay(&self.bookings, &self.guests, &self.rooms, booking_id)
    }

    // =========================================================================
    // Invoices
    // =========================================================================

    /// Generates (or regenerates) an invoice for a booking and returns its summary.
    ///
    /// An existing invoice id must already belong to `booking_id`.
    pub fn generate_invoice(
        &mut self,
        invoice_id: InvoiceId,
        booking_id: BookingId,
    ) -> CoreResult<String> {
        let stay = resolve_stay(&self.bookings, &self.guests, &self.rooms, booking_id)?;

        let invoice = self
            .invoices
            .entry(invoice_id)
            .or_insert_with(|| Invoice::new(invoice_id, booking_id));
        if invoice.booking_id() != booking_id {
            return Err(duplicate("invoice_id", invoice_id));
        }

        Ok(invoice.generate_invoice(&stay))
    }

    pub fn invoice(&self, invoice_id: InvoiceId) -> CoreResult<&Invoice> {
        self.invoices
            .get(&invoice_id)
            .ok_or(CoreError::InvoiceNotFound(invoice_id))
    }

    // =========================================================================
    // Interactions
    // =========================================================================

    /// Records and acknowledges a guest interaction.
    pub fn submit_interaction(&mut self, interaction: GuestInteraction) -> CoreResult<InteractionId> {
        let interaction_id = interaction.interaction_id();
        let guest = self
            .guests
            .get(&interaction.guest_id())
            .ok_or(CoreError::GuestNotFound(interaction.guest_id()))?;
        if self.interactions.contains_key(&interaction_id) {
            return Err(duplicate("interaction_id", interaction_id));
        }

        interaction.submit(guest);
        self.interactions.insert(interaction_id, interaction);
        Ok(interaction_id)
    }

    pub fn interaction(&self, interaction_id: InteractionId) -> CoreResult<&GuestInteraction> {
        self.interactions
            .get(&interaction_id)
            .ok_or(CoreError::InteractionNotFound(interaction_id))
    }

    pub fn interaction_mut(
        &mut self,
        interaction_id: InteractionId,
    ) -> CoreResult<&mut GuestInteraction> {
        self.interactions
            .get_mut(&interaction_id)
            .ok_or(CoreError::InteractionNotFound(interaction_id))
    }
}

fn resolve_stay<'a>(
    bookings: &'a BTreeMap<BookingId, Booking>,
    guests: &'a BTreeMap<GuestId, Guest>,
    rooms: &'a BTreeMap<RoomNumber, Room>,
    booking_id: BookingId,
) -> CoreResult<Stay<'a>> {
    let booking = bookings
        .get(&booking_id)
        .ok_or(CoreError::BookingNotFound(booking_id))?;
    let guest = guests
        .get(&booking.guest_id())
        .ok_or(CoreError::GuestNotFound(booking.guest_id()))?;
    let room = rooms
        .get(&booking.room_number())
        .ok_or(CoreError::RoomNotFound(booking.room_number()))?;
    Ok(Stay::new(booking, guest, room))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loyalty::LoyaltyProgram;
    use crate::money::Money;
    use crate::types::{BookingStatus, InteractionKind, InteractionStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn desk(policy: BookingPolicy) -> (FrontDesk, GuestId) {
        let mut desk = FrontDesk::new(policy);
        let guest_id = desk
            .register_guest(
                Guest::new("Joe Biden", "joe@biden.com", "555-0202")
                    .with_loyalty(LoyaltyProgram::new(300, "Silver")),
            )
            .unwrap();
        desk.add_room(Room::new(
            RoomNumber(102),
            "Double",
            ["Wi-Fi", "TV"],
            Money::from_major_minor(200, 0),
        ))
        .unwrap();
        (desk, guest_id)
    }

    #[test]
    fn test_guest_ids_are_sequential() {
        let mut desk = FrontDesk::default();
        let a = desk.register_guest(Guest::new("A", "a@x.io", "1")).unwrap();
        let b = desk.register_guest(Guest::new("B", "b@x.io", "2")).unwrap();
        assert_eq!(a, GuestId(1));
        assert_eq!(b, GuestId(2));
        assert!(matches!(desk.guest(GuestId(3)), Err(CoreError::GuestNotFound(_))));
    }

    #[test]
    fn test_booking_invoice_flow() {
        let (mut desk, guest_id) = desk(BookingPolicy::Permissive);
        let booking_id = desk
            .create_booking(BookingId(3), guest_id, RoomNumber(102), date(2025, 5, 1), date(2025, 5, 3))
            .unwrap();

        desk.confirm_booking(booking_id).unwrap();
        assert_eq!(desk.booking(booking_id).unwrap().status(), BookingStatus::Confirmed);
        assert!(!desk.room(RoomNumber(102)).unwrap().is_available());

        let summary = desk.generate_invoice(InvoiceId(1002), booking_id).unwrap();
        assert!(summary.contains("Guest: Joe Biden"));
        assert!(summary.contains("Total Due: $400.00"));
        assert_eq!(
            desk.invoice(InvoiceId(1002)).unwrap().total(),
            Money::from_major_minor(400, 0)
        );

        desk.cancel_booking(booking_id).unwrap();
        assert_eq!(desk.booking(booking_id).unwrap().status(), BookingStatus::Cancelled);
        assert!(desk.room(RoomNumber(102)).unwrap().is_available());
    }

    #[test]
    fn test_unknown_references_are_rejected() {
        let (mut desk, guest_id) = desk(BookingPolicy::Permissive);
        assert!(matches!(
            desk.create_booking(BookingId(1), GuestId(99), RoomNumber(102), date(2025, 5, 1), date(2025, 5, 3)),
            Err(CoreError::GuestNotFound(GuestId(99)))
        ));
        assert!(matches!(
            desk.create_booking(BookingId(1), guest_id, RoomNumber(999), date(2025, 5, 1), date(2025, 5, 3)),
            Err(CoreError::RoomNotFound(RoomNumber(999)))
        ));
        assert!(matches!(
            desk.confirm_booking(BookingId(42)),
            Err(CoreError::BookingNotFound(_))
        ));
        assert!(matches!(
            desk.generate_invoice(InvoiceId(1), BookingId(42)),
            Err(CoreError::BookingNotFound(_))
        ));
    }

    #[test]
    fn test_duplicates_are_rejected() {
        let (mut desk, guest_id) = desk(BookingPolicy::Permissive);
        assert!(desk
            .add_room(Room::new(RoomNumber(102), "Suite", ["TV"], Money::zero()))
            .is_err());

        desk.create_booking(BookingId(1), guest_id, RoomNumber(102), date(2025, 5, 1), date(2025, 5, 3))
            .unwrap();
        desk.create_booking(BookingId(2), guest_id, RoomNumber(102), date(2025, 6, 1), date(2025, 6, 3))
            .unwrap();
        assert!(desk
            .create_booking(BookingId(1), guest_id, RoomNumber(102), date(2025, 7, 1), date(2025, 7, 3))
            .is_err());

        desk.generate_invoice(InvoiceId(1001), BookingId(1)).unwrap();
        // Regenerating for the same booking is fine, re-pointing is not.
        desk.generate_invoice(InvoiceId(1001), BookingId(1)).unwrap();
        assert!(desk.generate_invoice(InvoiceId(1001), BookingId(2)).is_err());
    }

    #[test]
    fn test_permissive_accepts_unvalidated_input() {
        let mut desk = FrontDesk::new(BookingPolicy::Permissive);
        let guest_id = desk.register_guest(Guest::new("", "not-an-email", "")).unwrap();
        desk.add_room(Room::new(RoomNumber(1), "Closet", Vec::<String>::new(), Money::from_cents(-100)))
            .unwrap();
        let booking_id = desk
            .create_booking(BookingId(1), guest_id, RoomNumber(1), date(2025, 4, 5), date(2025, 4, 1))
            .unwrap();

        desk.generate_invoice(InvoiceId(1), booking_id).unwrap();
        // -4 nights × -$1.00
        assert_eq!(desk.invoice(InvoiceId(1)).unwrap().total().cents(), 400);
    }

    #[test]
    fn test_strict_validates_input() {
        let mut desk = FrontDesk::new(BookingPolicy::Strict);
        assert!(desk.register_guest(Guest::new("", "joe@biden.com", "")).is_err());
        assert!(desk.register_guest(Guest::new("Joe", "nope", "")).is_err());
        assert!(desk
            .add_room(Room::new(RoomNumber(1), "Closet", ["TV"], Money::from_cents(-100)))
            .is_err());

        let (mut desk, guest_id) = self::desk(BookingPolicy::Strict);
        assert!(matches!(
            desk.create_booking(BookingId(1), guest_id, RoomNumber(102), date(2025, 5, 3), date(2025, 5, 1)),
            Err(CoreError::Validation(ValidationError::InvalidDateRange { .. }))
        ));
    }

    #[test]
    fn test_strict_blocks_double_booking() {
        let (mut desk, guest_id) = desk(BookingPolicy::Strict);
        desk.create_booking(BookingId(1), guest_id, RoomNumber(102), date(2025, 5, 1), date(2025, 5, 3))
            .unwrap();
        desk.create_booking(BookingId(2), guest_id, RoomNumber(102), date(2025, 5, 1), date(2025, 5, 3))
            .unwrap();

        desk.confirm_booking(BookingId(1)).unwrap();
        let err = desk.confirm_booking(BookingId(2)).unwrap_err();
        assert!(err.is_declined());

        desk.cancel_booking(BookingId(2)).unwrap();
        assert!(!desk.room(RoomNumber(102)).unwrap().is_available());
    }

    #[test]
    fn test_loyalty_through_desk() {
        let (mut desk, guest_id) = desk(BookingPolicy::Permissive);
        assert_eq!(desk.add_loyalty_points(guest_id, 200).unwrap(), 500);
        assert!(desk.redeem_loyalty_points(guest_id, 10_000).is_err());
        assert_eq!(desk.redeem_loyalty_points(guest_id, 100).unwrap(), 400);

        let other = desk
            .register_guest(Guest::new("Walk In", "walk@in.com", "555-0000"))
            .unwrap();
        assert!(matches!(
            desk.redeem_loyalty_points(other, 1),
            Err(CoreError::NoLoyaltyProgram(_))
        ));
    }

    #[test]
    fn test_booking_history() {
        let (mut desk, guest_id) = desk(BookingPolicy::Permissive);
        let other = desk
            .register_guest(Guest::new("Donald Trump", "donald@trump.com", "555-0101"))
            .unwrap();
        desk.create_booking(BookingId(5), guest_id, RoomNumber(102), date(2025, 5, 1), date(2025, 5, 3))
            .unwrap();
        desk.create_booking(BookingId(4), other, RoomNumber(102), date(2025, 6, 1), date(2025, 6, 3))
            .unwrap();
        desk.create_booking(BookingId(3), guest_id, RoomNumber(102), date(2025, 7, 1), date(2025, 7, 3))
            .unwrap();

        let ids: Vec<BookingId> = desk
            .booking_history(guest_id)
            .unwrap()
            .iter()
            .map(|b| b.booking_id())
            .collect();
        assert_eq!(ids, vec![BookingId(3), BookingId(5)]);
    }

    #[test]
    fn test_interactions() {
        let (mut desk, guest_id) = desk(BookingPolicy::Permissive);
        let id = desk
            .submit_interaction(GuestInteraction::new(
                InteractionId(102),
                guest_id,
                InteractionKind::ServiceRequest,
                "Need extra pillows and towels.",
            ))
            .unwrap();

        assert_eq!(desk.interaction(id).unwrap().status(), InteractionStatus::Open);
        desk.interaction_mut(id)
            .unwrap()
            .set_status(InteractionStatus::Closed);
        assert_eq!(desk.interaction(id).unwrap().status(), InteractionStatus::Closed);

        assert!(desk
            .submit_interaction(GuestInteraction::new(
                InteractionId(103),
                GuestId(77),
                InteractionKind::Feedback,
                "Who am I?",
            ))
            .is_err());
    }
}
