use crate::{error::BookingError, types::Booking};

pub trait BookingBackend: Clone + Send + Sync + 'static {
    fn bookings(&self) -> Vec<Booking>;
    /// Stores `booking` unless its (date, slot) pair is already taken. The
    /// conflict check and the write happen as one step.
    fn book_slot(&self, booking: Booking) -> Result<(), BookingError>;
}
