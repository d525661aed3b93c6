use crate::{
    backend::BookingBackend,
    clock::{format_date, Clock},
    error::BookingError,
    slots::is_catalog_slot,
    types::{Booking, BookingRequest},
};
use tracing::{debug, info};

/// Validates `request` against the booking window and the slot catalog and
/// stores it. Returns the confirmation shown to the client.
///
/// Dates are compared as `YYYY-MM-DD` strings, which only works because the
/// format is fixed width and zero padded.
pub fn create_booking<B: BookingBackend, C: Clock>(
    backend: &B,
    clock: &C,
    request: BookingRequest,
) -> Result<String, BookingError> {
    let booking = request.into_booking()?;

    let today = format_date(clock.today());
    let max_bookable_date = format_date(clock.max_bookable_date());

    if booking.date > max_bookable_date {
        debug!(date = %booking.date, %max_bookable_date, "Booking date beyond window");
        return Err(BookingError::TooFarAhead(max_bookable_date));
    }
    if booking.date < today {
        debug!(date = %booking.date, %today, "Booking date in the past");
        return Err(BookingError::InPast);
    }
    if !is_catalog_slot(&booking.slot) {
        debug!(slot = %booking.slot, "Unknown slot");
        return Err(BookingError::InvalidSlot);
    }

    let message = confirmation_message(&booking);
    let (date, slot) = (booking.date.clone(), booking.slot.clone());
    backend.book_slot(booking)?;
    info!(%date, %slot, "Booking confirmed");
    Ok(message)
}

fn confirmation_message(booking: &Booking) -> String {
    format!(
        "Agendamento confirmado para {} no dia {} às {}. Serviço: {}",
        booking.client_name, booking.date, booking.slot, booking.service
    )
}
