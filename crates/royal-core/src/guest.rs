//! # Guest
//!
//! Contact details plus an optional loyalty program.
//!
//! The guest owns its [`LoyaltyProgram`] outright (`Option`, not a shared
//! handle): attaching a new program hands back the old one, detaching hands
//! the program to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::loyalty::LoyaltyProgram;

/// A hotel guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    name: String,
    email: String,
    phone: String,
    loyalty: Option<LoyaltyProgram>,
}

impl Guest {
    /// Creates a guest without a loyalty program.
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Guest {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            loyalty: None,
        }
    }

    /// Builder-style variant of [`Guest::attach_loyalty_program`].
    pub fn with_loyalty(mut self, program: LoyaltyProgram) -> Self {
        self.loyalty = Some(program);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn loyalty_program(&self) -> Option<&LoyaltyProgram> {
        self.loyalty.as_ref()
    }

    pub fn loyalty_program_mut(&mut self) -> Option<&mut LoyaltyProgram> {
        self.loyalty.as_mut()
    }

    /// Attaches a program, returning the one it replaces.
    pub fn attach_loyalty_program(&mut self, program: LoyaltyProgram) -> Option<LoyaltyProgram> {
        self.loyalty.replace(program)
    }

    /// Detaches and returns the current program.
    pub fn detach_loyalty_program(&mut self) -> Option<LoyaltyProgram> {
        self.loyalty.take()
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loyalty_status = match self.loyalty {
            Some(_) => "Loyalty Program Attached",
            None => "No Loyalty Program",
        };
        write!(
            f,
            "Guest: {}, Email: {}, {}",
            self.name, self.email, loyalty_status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_without_loyalty() {
        let guest = Guest::new("Joe Biden", "joe@biden.com", "555-0202");
        assert!(guest.loyalty_program().is_none());
        assert_eq!(
            guest.to_string(),
            "Guest: Joe Biden, Email: joe@biden.com, No Loyalty Program"
        );
    }

    #[test]
    fn test_attach_and_detach_loyalty() {
        let mut guest = Guest::new("Joe Biden", "joe@biden.com", "555-0202");
        assert!(guest
            .attach_loyalty_program(LoyaltyProgram::new(300, "Silver"))
            .is_none());
        assert_eq!(guest.loyalty_program().map(|p| p.points()), Some(300));

        let previous = guest.attach_loyalty_program(LoyaltyProgram::new(10, "Basic"));
        assert_eq!(previous.map(|p| p.tier().to_string()), Some("Silver".to_string()));

        let detached = guest.detach_loyalty_program();
        assert_eq!(detached.map(|p| p.points()), Some(10));
        assert!(guest.loyalty_program().is_none());
    }

    #[test]
    fn test_loyalty_mutation_through_guest() {
        let mut guest = Guest::new("Donald Trump", "donald@trump.com", "555-0101")
            .with_loyalty(LoyaltyProgram::new(500, "Gold"));

        if let Some(program) = guest.loyalty_program_mut() {
            program.add_points(100);
        }
        assert_eq!(guest.loyalty_program().map(|p| p.points()), Some(600));
        assert!(guest.to_string().ends_with("Loyalty Program Attached"));
    }
}
