use roombook_core::{
    errors::{BookingError, BookingResult},
    models::booking::Booking,
    review::{Confirmer, ReviewAction, ReviewOutcome},
};
use tracing::{debug, info};

use crate::{backend::BookingBackend, session::Session};

/// Applies a review action to a booking once the user has confirmed it.
///
/// The action is checked against the booking's current status first; a
/// disallowed action fails with [`BookingError::Validation`] without asking.
/// A declined confirmation returns [`ReviewOutcome::Declined`] and leaves the
/// backend untouched.
pub async fn review_booking(
    backend: &dyn BookingBackend,
    confirmer: &dyn Confirmer,
    session: &Session,
    booking: &Booking,
    action: ReviewAction,
) -> BookingResult<ReviewOutcome> {
    if !action.permits(booking.status) {
        return Err(BookingError::Validation(format!(
            "Cannot {:?} booking {} while it is {}",
            action, booking.id, booking.status
        )));
    }

    let confirmation = action.confirmation(booking);
    if !confirmer.confirm(&confirmation).await {
        debug!("{:?} of booking {} declined", action, booking.id);
        return Ok(ReviewOutcome::Declined);
    }

    let outcome = match action.resulting_status() {
        Some(status) => {
            let updated = backend.update_status(session, &booking.id, status).await?;
            ReviewOutcome::Updated(updated)
        }
        None => {
            backend.delete_booking(session, &booking.id).await?;
            ReviewOutcome::Deleted
        }
    };

    info!("{:?} applied to booking {}", action, booking.id);
    Ok(outcome)
}
