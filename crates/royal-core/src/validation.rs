//! # Validation Module
//!
//! Input validators applied by the [`FrontDesk`](crate::FrontDesk) when it
//! runs under [`BookingPolicy::Strict`](crate::BookingPolicy).
//!
//! The permissive policy skips all of them: a guest with an empty name, a
//! room with a negative price or a stay whose check-out precedes check-in
//! are all accepted there.
//!
//! ## Usage
//! ```rust
//! use chrono::NaiveDate;
//! use royal_core::validation::{validate_email, validate_stay_dates};
//!
//! assert!(validate_email("joe@biden.com").is_ok());
//!
//! let check_in = NaiveDate::from_ymd_opt(2025, 5, 3).unwrap();
//! let check_out = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
//! assert!(validate_stay_dates(check_in, check_out).is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a guest name: non-empty after trimming, at most
/// [`MAX_NAME_LENGTH`] characters.
pub fn validate_guest_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@` with a non-empty local part
/// - Domain contains a `.` that is neither first nor last
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("missing '@'"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must look like name@domain"));
    }

    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return Err(invalid("domain must contain a dot"));
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a nightly price. Zero is allowed (complimentary rooms).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price_per_night".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates that a stay lasts at least one night.
///
/// ```text
/// check_in 2025-04-01, check_out 2025-04-05  → OK (4 nights)
/// check_in 2025-04-05, check_out 2025-04-05  → Err (0 nights)
/// check_in 2025-04-05, check_out 2025-04-01  → Err (reversed)
/// ```
pub fn validate_stay_dates(check_in: NaiveDate, check_out: NaiveDate) -> ValidationResult<()> {
    if check_out <= check_in {
        return Err(ValidationError::InvalidDateRange {
            check_in,
            check_out,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_guest_name() {
        assert!(validate_guest_name("Donald Trump").is_ok());
        assert!(validate_guest_name("").is_err());
        assert!(validate_guest_name("   ").is_err());
        assert!(validate_guest_name(&"A".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("donald@trump.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("@trump.com").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("joe@localhost").is_err());
        assert!(validate_email("joe@.com").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_major_minor(300, 0)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_stay_dates() {
        assert!(validate_stay_dates(date(2025, 4, 1), date(2025, 4, 5)).is_ok());
        assert!(validate_stay_dates(date(2025, 4, 5), date(2025, 4, 5)).is_err());
        assert!(matches!(
            validate_stay_dates(date(2025, 4, 5), date(2025, 4, 1)),
            Err(ValidationError::InvalidDateRange { .. })
        ));
    }
}
