//! Decision rules for approving, rejecting, cancelling and deleting bookings.
//!
//! Every action goes through a [`Confirmer`] before anything reaches the
//! backend. The confirmer is whatever the surface has: a dialog, a terminal
//! prompt, or a fixed answer in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::booking::{Booking, BookingStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
    Cancel,
    Delete,
}

impl ReviewAction {
    /// Whether the action applies to a booking currently in `status`.
    pub fn permits(self, status: BookingStatus) -> bool {
        match self {
            ReviewAction::Approve | ReviewAction::Reject => status == BookingStatus::Pending,
            ReviewAction::Cancel => {
                matches!(status, BookingStatus::Pending | BookingStatus::Approved)
            }
            ReviewAction::Delete => true,
        }
    }

    /// Status the booking ends up in; `None` when the booking is removed.
    pub fn resulting_status(self) -> Option<BookingStatus> {
        match self {
            ReviewAction::Approve => Some(BookingStatus::Approved),
            ReviewAction::Reject => Some(BookingStatus::Rejected),
            ReviewAction::Cancel => Some(BookingStatus::Cancelled),
            ReviewAction::Delete => None,
        }
    }

    pub fn confirmation(self, booking: &Booking) -> Confirmation {
        let subject = format!(
            "{} ({}) booked by {}",
            booking.purpose.as_deref().unwrap_or("Booking"),
            booking.time_range(),
            booking.user_name()
        );

        match self {
            ReviewAction::Approve => Confirmation {
                title: "Approve booking?".to_string(),
                text: subject,
                confirm_label: "Approve".to_string(),
                destructive: false,
            },
            ReviewAction::Reject => Confirmation {
                title: "Reject booking?".to_string(),
                text: subject,
                confirm_label: "Reject".to_string(),
                destructive: true,
            },
            ReviewAction::Cancel => Confirmation {
                title: "Cancel booking?".to_string(),
                text: subject,
                confirm_label: "Cancel booking".to_string(),
                destructive: true,
            },
            ReviewAction::Delete => Confirmation {
                title: "Delete booking?".to_string(),
                text: format!("{}. This cannot be undone.", subject),
                confirm_label: "Delete".to_string(),
                destructive: true,
            },
        }
    }
}

/// What the user is asked before an action is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub destructive: bool,
}

#[async_trait]
pub trait Confirmer: Send + Sync {
    /// Returns `true` when the user accepted.
    async fn confirm(&self, confirmation: &Confirmation) -> bool;
}

/// Answers every confirmation the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirmer(pub bool);

#[async_trait]
impl Confirmer for FixedConfirmer {
    async fn confirm(&self, _confirmation: &Confirmation) -> bool {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    Updated(Booking),
    Deleted,
    Declined,
}
