//! # Guest Interactions
//!
//! Feedback and service requests raised by a guest. Independent of the
//! booking and payment flow; the status can be set to anything at any time.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::guest::Guest;
use crate::types::{GuestId, InteractionId, InteractionKind, InteractionStatus};

/// A single piece of feedback or a service request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestInteraction {
    interaction_id: InteractionId,
    guest_id: GuestId,
    kind: InteractionKind,
    message: String,
    status: InteractionStatus,
}

impl GuestInteraction {
    /// Creates an interaction in the `Open` state.
    pub fn new(
        interaction_id: InteractionId,
        guest_id: GuestId,
        kind: InteractionKind,
        message: impl Into<String>,
    ) -> Self {
        GuestInteraction {
            interaction_id,
            guest_id,
            kind,
            message: message.into(),
            status: InteractionStatus::Open,
        }
    }

    /// Acknowledges the interaction on behalf of `guest`. No state changes.
    pub fn submit(&self, guest: &Guest) {
        info!(
            interaction_id = %self.interaction_id,
            kind = %self.kind,
            guest = guest.name(),
            "Interaction submitted"
        );
    }

    pub fn interaction_id(&self) -> InteractionId {
        self.interaction_id
    }

    pub fn guest_id(&self) -> GuestId {
        self.guest_id
    }

    pub fn kind(&self) -> &InteractionKind {
        &self.kind
    }

    pub fn set_kind(&mut self, kind: InteractionKind) {
        self.kind = kind;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn status(&self) -> InteractionStatus {
        self.status
    }

    pub fn set_status(&mut self, status: InteractionStatus) {
        self.status = status;
    }
}

impl fmt::Display for GuestInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Interaction #{} | Type: {} | Status: {}",
            self.interaction_id, self.kind, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_interaction_is_open() {
        let interaction = GuestInteraction::new(
            InteractionId(101),
            GuestId(1),
            InteractionKind::Feedback,
            "Excellent service and luxurious stay!",
        );
        assert_eq!(interaction.status(), InteractionStatus::Open);
        assert_eq!(
            interaction.to_string(),
            "Interaction #101 | Type: Feedback | Status: Open"
        );
    }

    #[test]
    fn test_submit_does_not_change_state() {
        let guest = Guest::new("Joe Biden", "joe@biden.com", "555-0202");
        let interaction = GuestInteraction::new(
            InteractionId(102),
            GuestId(1),
            InteractionKind::ServiceRequest,
            "Need extra pillows and towels.",
        );
        let before = interaction.clone();
        interaction.submit(&guest);
        assert_eq!(interaction, before);
    }

    #[test]
    fn test_status_has_no_enforced_order() {
        let mut interaction = GuestInteraction::new(
            InteractionId(103),
            GuestId(1),
            InteractionKind::Other("Complaint".to_string()),
            "Noisy neighbours",
        );
        interaction.set_status(InteractionStatus::Closed);
        interaction.set_status(InteractionStatus::Open);
        interaction.set_status(InteractionStatus::InProgress);
        assert_eq!(interaction.status(), InteractionStatus::InProgress);

        interaction.set_kind(InteractionKind::ServiceRequest);
        interaction.set_message("Move rooms please");
        assert_eq!(
            interaction.to_string(),
            "Interaction #103 | Type: ServiceRequest | Status: InProgress"
        );
        assert_eq!(interaction.message(), "Move rooms please");
    }
}
