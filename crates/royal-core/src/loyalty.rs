//! # Loyalty Program
//!
//! Point balance and tier label for a guest.
//!
//! ```rust
//! use royal_core::loyalty::LoyaltyProgram;
//!
//! let mut program = LoyaltyProgram::new(500, "Gold");
//! assert!(program.redeem(10_000).is_err()); // declined
//! assert_eq!(program.points(), 500);
//!
//! assert_eq!(program.redeem(200).unwrap(), 300);
//! ```
//!
//! The tier is a plain label. Nothing here promotes or demotes a guest
//! based on their balance.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

use crate::error::{CoreError, CoreResult};
use crate::DEFAULT_LOYALTY_TIER;

/// Loyalty points and tier for one guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyProgram {
    points: u64,
    tier: String,
}

impl LoyaltyProgram {
    /// Creates a program with an opening balance and tier.
    pub fn new(points: u64, tier: impl Into<String>) -> Self {
        LoyaltyProgram {
            points,
            tier: tier.into(),
        }
    }

    /// Adds points to the balance. Always succeeds.
    pub fn add_points(&mut self, amount: u64) {
        self.points = self.points.saturating_add(amount);
        info!(added = amount, total = self.points, "Loyalty points added");
    }

    /// Redeems points if the balance covers them.
    ///
    /// Returns the remaining balance. When `amount` exceeds the balance the
    /// request is declined with [`CoreError::InsufficientPoints`] and the
    /// balance is left untouched.
    pub fn redeem(&mut self, amount: u64) -> CoreResult<u64> {
        if amount > self.points {
            warn!(
                requested = amount,
                available = self.points,
                "Not enough points to redeem"
            );
            return Err(CoreError::InsufficientPoints {
                available: self.points,
                requested: amount,
            });
        }

        self.points -= amount;
        info!(redeemed = amount, remaining = self.points, "Loyalty points redeemed");
        Ok(self.points)
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn set_points(&mut self, points: u64) {
        self.points = points;
    }

    pub fn tier(&self) -> &str {
        &self.tier
    }

    pub fn set_tier(&mut self, tier: impl Into<String>) {
        self.tier = tier.into();
    }
}

impl Default for LoyaltyProgram {
    fn default() -> Self {
        LoyaltyProgram::new(0, DEFAULT_LOYALTY_TIER)
    }
}

impl fmt::Display for LoyaltyProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loyalty Program: {} Tier with {} points.",
            self.tier, self.points
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
