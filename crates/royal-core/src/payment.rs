//! # Payments
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ProcessPayment (capability)                         │
//! │                                                                         │
//! │  Payment            payment_id, amount, method                         │
//! │  (base record)      process_payment → Err(PaymentNotImplemented)       │
//! │        │                                                                │
//! │        ▼ wrapped by                                                     │
//! │  CreditCardPayment  + card_number, expiry_date                         │
//! │                     process_payment → Ok(true) (simulated)             │
//! │                                                                         │
//! │  PaymentInstrument  closed enum of concrete kinds; adding a variant    │
//! │                     forces a processing arm at compile time            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No gateway is contacted. Card numbers and expiry dates are stored as
//! given, without Luhn or expiry checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{error, info};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::PaymentId;

/// Something that can settle an amount.
pub trait ProcessPayment {
    /// Processes the payment, returning `true` on success.
    fn process_payment(&self) -> CoreResult<bool>;
}

// =============================================================================
// Payment (base record)
// =============================================================================

/// Fields common to every payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    payment_id: PaymentId,
    amount: Money,
    method: String,
}

impl Payment {
    pub fn new(payment_id: PaymentId, amount: Money, method: impl Into<String>) -> Self {
        Payment {
            payment_id,
            amount,
            method: method.into(),
        }
    }

    pub fn payment_id(&self) -> PaymentId {
        self.payment_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn set_method(&mut self, method: impl Into<String>) {
        self.method = method.into();
    }
}

/// A bare payment record cannot be processed.
impl ProcessPayment for Payment {
    fn process_payment(&self) -> CoreResult<bool> {
        error!(
            payment_id = %self.payment_id,
            method = %self.method,
            "process_payment called on a payment without a processor"
        );
        Err(CoreError::PaymentNotImplemented {
            payment_id: self.payment_id,
            method: self.method.clone(),
        })
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment #{} - Method: {}, Amount: {}",
            self.payment_id, self.method, self.amount
        )
    }
}

// =============================================================================
// Credit Card
// =============================================================================

/// A card payment. Processing always succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardPayment {
    payment: Payment,
    card_number: String,
    expiry_date: String,
}

impl CreditCardPayment {
    pub fn new(
        payment: Payment,
        card_number: impl Into<String>,
        expiry_date: impl Into<String>,
    ) -> Self {
        CreditCardPayment {
            payment,
            card_number: card_number.into(),
            expiry_date: expiry_date.into(),
        }
    }

    /// The underlying payment record.
    pub fn payment(&self) -> &Payment {
        &self.payment
    }

    pub fn payment_mut(&mut self) -> &mut Payment {
        &mut self.payment
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn set_card_number(&mut self, card_number: impl Into<String>) {
        self.card_number = card_number.into();
    }

    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    pub fn set_expiry_date(&mut self, expiry_date: impl Into<String>) {
        self.expiry_date = expiry_date.into();
    }

    /// Last four characters of the card number (fewer if the number is short).
    pub fn last_four(&self) -> &str {
        let start = self
            .card_number
            .char_indices()
            .rev()
            .nth(3)
            .map_or(0, |(idx, _)| idx);
        &self.card_number[start..]
    }
}

impl ProcessPayment for CreditCardPayment {
    fn process_payment(&self) -> CoreResult<bool> {
        // Simulated: no gateway is contacted.
        info!(
            payment_id = %self.payment.payment_id,
            amount = %self.payment.amount,
            card_last_four = self.last_four(),
            "Processing credit card payment"
        );
        Ok(true)
    }
}

impl fmt::Display for CreditCardPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | CC: **** **** **** {}", self.payment, self.last_four())
    }
}

// =============================================================================
// Payment Instrument
// =============================================================================

/// Every concrete payment kind the desk can process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentInstrument {
    CreditCard(CreditCardPayment),
}

impl PaymentInstrument {
    /// The shared payment record of whichever kind this is.
    pub fn payment(&self) -> &Payment {
        match self {
            PaymentInstrument::CreditCard(card) => card.payment(),
        }
    }
}

impl ProcessPayment for PaymentInstrument {
    fn process_payment(&self) -> CoreResult<bool> {
        match self {
            PaymentInstrument::CreditCard(card) => card.process_payment(),
        }
    }
}

impl From<CreditCardPayment> for PaymentInstrument {
    fn from(card: CreditCardPayment) -> Self {
        PaymentInstrument::CreditCard(card)
    }
}

impl fmt::Display for PaymentInstrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentInstrument::CreditCard(card) => fmt::Display::fmt(card, f),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
