use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    backend::BookingBackend,
    clock::Clock,
    error::{BookingError, StoreError},
    types::Booking,
};

pub struct MockBookingBackendInner {
    pub success: AtomicBool,
    pub calls_to_bookings: AtomicU64,
    pub calls_to_book_slot: AtomicU64,
    pub bookings: Mutex<Vec<Booking>>,
}

#[derive(Clone)]
pub struct MockBookingBackend(pub Arc<MockBookingBackendInner>);

impl MockBookingBackendInner {
    fn new(bookings: Vec<Booking>) -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_bookings: AtomicU64::default(),
            calls_to_book_slot: AtomicU64::default(),
            bookings: Mutex::new(bookings),
        }
    }
}

impl MockBookingBackend {
    pub fn new() -> Self {
        Self::with_bookings(vec![])
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self(Arc::new(MockBookingBackendInner::new(bookings)))
    }

    /// Reads the stored bookings without counting as a backend call.
    pub fn bookings_snapshot(&self) -> Vec<Booking> {
        self.0.bookings.lock().unwrap().clone()
    }
}

impl BookingBackend for MockBookingBackend {
    fn bookings(&self) -> Vec<Booking> {
        self.0.calls_to_bookings.fetch_add(1, Ordering::SeqCst);
        self.bookings_snapshot()
    }

    fn book_slot(&self, booking: Booking) -> Result<(), BookingError> {
        self.0.calls_to_book_slot.fetch_add(1, Ordering::SeqCst);
        if !self.0.success.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other("Supposed to fail")).into());
        }
        let mut bookings = self.0.bookings.lock().unwrap();
        if bookings
            .iter()
            .any(|existing| existing.occupies(&booking.date, &booking.slot))
        {
            return Err(BookingError::SlotTaken);
        }
        bookings.push(booking);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// `date` as `YYYY-MM-DD`, `time` as `HH:MM`.
    pub fn at(date: &str, time: &str) -> Self {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let time = NaiveTime::parse_from_str(time, "%H:%M").unwrap();
        Self(date.and_time(time))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
