//! # Front Desk Scenarios
//!
//! Two scripted guest journeys run against a shared [`FrontDesk`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register ──► add room ──► book + confirm ──► invoice ──► pay by card   │
//! │      ──► booking history ──► interaction ──► cancellation               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Declined outcomes (insufficient points, an occupied room under the strict
//! policy) are recorded in the report and the scenario carries on. Any other
//! error aborts the scenario.

use chrono::NaiveDate;
use std::fmt;
use tracing::{info, warn};

use royal_core::{
    BookingId, CoreError, CoreResult, CreditCardPayment, FrontDesk, Guest, GuestId,
    GuestInteraction, InteractionId, InteractionKind, InvoiceId, LoyaltyProgram, Money, Payment,
    PaymentId, PaymentInstrument, ProcessPayment, Room, RoomNumber,
};

use crate::error::{AppError, AppResult};

/// Points the Trump scenario tries to redeem; more than the guest holds.
const OVERSIZED_REDEMPTION: u64 = 10_000;

// =============================================================================
// Scenario
// =============================================================================

/// A scripted guest journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    DonaldTrump,
    JoeBiden,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::DonaldTrump, Scenario::JoeBiden];

    pub fn guest_name(&self) -> &'static str {
        match self {
            Scenario::DonaldTrump => "Donald Trump",
            Scenario::JoeBiden => "Joe Biden",
        }
    }

    /// Runs the scenario against `desk`.
    pub fn run(&self, desk: &mut FrontDesk) -> AppResult<ScenarioReport> {
        info!(scenario = self.guest_name(), policy = %desk.policy(), "Running scenario");
        match self {
            Scenario::DonaldTrump => donald_trump(desk),
            Scenario::JoeBiden => joe_biden(desk),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.guest_name())
    }
}

// =============================================================================
// Report
// =============================================================================

/// What a scenario printed, plus the figures tests care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub title: String,
    pub guest_id: GuestId,
    pub lines: Vec<String>,
    pub invoice_total: Money,
    pub payment_succeeded: bool,
}

impl ScenarioReport {
    fn new(scenario: Scenario, guest_id: GuestId) -> Self {
        ScenarioReport {
            title: scenario.guest_name().to_string(),
            guest_id,
            lines: Vec::new(),
            invoice_total: Money::zero(),
            payment_succeeded: false,
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Keeps declined outcomes in the report; any other error propagates.
    fn allow_declined<T>(&mut self, result: CoreResult<T>) -> AppResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_declined() => {
                warn!(error = %e, "Declined");
                self.push(format!("Declined: {}", e));
                Ok(None)
            }
            Err(e) => Err(AppError::from(e)),
        }
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Test Case: {} =====", self.title)?;
        for line in &self.lines {
            writeln!(f, "{}", line.trim_end())?;
        }
        writeln!(f, "===================================")
    }
}

// =============================================================================
// Shared Steps
// =============================================================================

fn date(year: i32, month: u32, day: u32) -> CoreResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CoreError::from(royal_core::ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: format!("{}-{:02}-{:02} is not a calendar date", year, month, day),
        })
    })
}

/// Books, confirms and invoices a stay, then pays the invoice by card.
fn check_in_and_pay(
    desk: &mut FrontDesk,
    report: &mut ScenarioReport,
    booking_id: BookingId,
    room_number: RoomNumber,
    stay: (NaiveDate, NaiveDate),
    invoice_id: InvoiceId,
    card: (PaymentId, &str, &str),
) -> AppResult<()> {
    let guest_id = report.guest_id;
    desk.create_booking(booking_id, guest_id, room_number, stay.0, stay.1)?;
    if report.allow_declined(desk.confirm_booking(booking_id))?.is_none() {
        return Ok(());
    }

    let summary = desk.generate_invoice(invoice_id, booking_id)?;
    report.push(summary);
    let total = desk.invoice(invoice_id)?.total();
    report.invoice_total = total;

    let (payment_id, card_number, expiry_date) = card;
    let instrument = PaymentInstrument::from(CreditCardPayment::new(
        Payment::new(payment_id, total, "Credit Card"),
        card_number,
        expiry_date,
    ));
    if instrument.process_payment()? {
        report.payment_succeeded = true;
        let name = desk.guest(guest_id)?.name().to_string();
        report.push(format!("Payment processed successfully for {}.", name));
    }
    Ok(())
}

fn record_history(desk: &FrontDesk, report: &mut ScenarioReport) -> AppResult<()> {
    let history = desk.booking_history(report.guest_id)?;
    let line = format!(
        "Booking history: {}",
        history
            .iter()
            .map(|booking| format!("#{} ({})", booking.booking_id(), booking.status()))
            .collect::<Vec<_>>()
            .join(", ")
    );
    report.push(line);
    Ok(())
}

/// Booking line with the guest resolved to a name.
fn booking_line(desk: &FrontDesk, booking_id: BookingId) -> AppResult<String> {
    let booking = desk.booking(booking_id)?;
    let guest = desk.guest(booking.guest_id())?;
    Ok(format!(
        "Booking #{} | Guest: {} | Room: {} | Status: {}",
        booking.booking_id(),
        guest.name(),
        booking.room_number(),
        booking.status()
    ))
}

fn record_interaction(
    desk: &mut FrontDesk,
    report: &mut ScenarioReport,
    interaction_id: InteractionId,
    kind: InteractionKind,
    message: &str,
) -> AppResult<()> {
    let interaction = GuestInteraction::new(interaction_id, report.guest_id, kind, message);
    desk.submit_interaction(interaction)?;
    report.push(desk.interaction(interaction_id)?.to_string());
    Ok(())
}

// =============================================================================
// Scripts
// =============================================================================

fn donald_trump(desk: &mut FrontDesk) -> AppResult<ScenarioReport> {
    let guest_id = desk.register_guest(
        Guest::new("Donald Trump", "donald@trump.com", "555-0101")
            .with_loyalty(LoyaltyProgram::new(500, "Gold")),
    )?;
    let mut report = ScenarioReport::new(Scenario::DonaldTrump, guest_id);

    let suite = desk.add_room(Room::new(
        RoomNumber(101),
        "Suite",
        ["Wi-Fi", "TV", "Mini-bar"],
        Money::from_major_minor(300, 0),
    ))?;

    check_in_and_pay(
        desk,
        &mut report,
        BookingId(1),
        suite,
        (date(2025, 4, 1)?, date(2025, 4, 5)?),
        InvoiceId(1001),
        (PaymentId(5001), "1234567812345678", "12/28"),
    )?;

    let redeemed = desk.redeem_loyalty_points(guest_id, OVERSIZED_REDEMPTION);
    if let Some(remaining) = report.allow_declined(redeemed)? {
        report.push(format!("Redeemed {} points, {} left.", OVERSIZED_REDEMPTION, remaining));
    }

    record_history(desk, &mut report)?;
    record_interaction(
        desk,
        &mut report,
        InteractionId(101),
        InteractionKind::Feedback,
        "Excellent service and luxurious stay!",
    )?;

    // Second stay in the same suite, confirmed and then cancelled.
    let rebooking = desk.create_booking(
        BookingId(2),
        guest_id,
        suite,
        date(2025, 4, 10)?,
        date(2025, 4, 12)?,
    )?;
    report.allow_declined(desk.confirm_booking(rebooking))?;
    desk.cancel_booking(rebooking)?;
    report.push(booking_line(desk, rebooking)?);

    Ok(report)
}

fn joe_biden(desk: &mut FrontDesk) -> AppResult<ScenarioReport> {
    let guest_id = desk.register_guest(
        Guest::new("Joe Biden", "joe@biden.com", "555-0202")
            .with_loyalty(LoyaltyProgram::new(300, "Silver")),
    )?;
    let mut report = ScenarioReport::new(Scenario::JoeBiden, guest_id);

    let double = desk.add_room(Room::new(
        RoomNumber(102),
        "Double",
        ["Wi-Fi", "TV"],
        Money::from_major_minor(200, 0),
    ))?;

    check_in_and_pay(
        desk,
        &mut report,
        BookingId(3),
        double,
        (date(2025, 5, 1)?, date(2025, 5, 3)?),
        InvoiceId(1002),
        (PaymentId(5002), "8765432187654321", "11/27"),
    )?;

    record_history(desk, &mut report)?;
    record_interaction(
        desk,
        &mut report,
        InteractionId(102),
        InteractionKind::ServiceRequest,
        "Need extra pillows and towels.",
    )?;

    desk.cancel_booking(BookingId(3))?;
    report.push(booking_line(desk, BookingId(3))?);

    Ok(report)
}

// =============================================================================
// Tests
// =============================================================================
