use crate::{
    backend::BookingBackend,
    clock::{format_date, Clock},
    slots::{catalog, SLOT_CATALOG},
    types::{Availability, Booking, DayAvailability},
};
use std::collections::BTreeMap;

pub fn get_availability<B: BookingBackend, C: Clock>(backend: &B, clock: &C) -> Availability {
    let bookings = backend.bookings();
    let current_time = clock.current_time_label();
    let max_bookable_date = format_date(clock.max_bookable_date());

    Availability {
        free_slots_on_max_date: free_slots_on(&max_bookable_date, &current_time, &bookings),
        bookings_by_date: group_by_date(bookings),
        max_bookable_date,
    }
}

/// Catalog slots on `date` that nobody booked and that are not earlier than
/// `current_time`.
pub fn free_slots_on(date: &str, current_time: &str, bookings: &[Booking]) -> Vec<String> {
    SLOT_CATALOG
        .iter()
        .filter(|slot| **slot >= current_time)
        .filter(|slot| !bookings.iter().any(|booking| booking.occupies(date, slot)))
        .map(|slot| slot.to_string())
        .collect()
}

pub fn group_by_date(bookings: Vec<Booking>) -> BTreeMap<String, DayAvailability> {
    let mut days: BTreeMap<String, DayAvailability> = BTreeMap::new();
    for booking in bookings {
        let day = days
            .entry(booking.date.clone())
            .or_insert_with(|| DayAvailability {
                free_slots: catalog(),
                bookings: vec![],
            });
        if let Some(index) = day.free_slots.iter().position(|slot| *slot == booking.slot) {
            day.free_slots.remove(index);
        }
        day.bookings.push(booking);
    }
    days
}
