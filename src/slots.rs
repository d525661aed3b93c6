/// Bookable times of day, in order. Zero padded so that string order is time order.
pub const SLOT_CATALOG: [&str; 14] = [
    "08:00", "08:45", "09:30", "10:15", "11:00", "11:45", "12:30", "13:15", "14:00", "14:45",
    "15:30", "16:15", "17:00", "17:45",
];

pub fn is_catalog_slot(slot: &str) -> bool {
    SLOT_CATALOG.contains(&slot)
}

pub fn catalog() -> Vec<String> {
    SLOT_CATALOG.iter().map(|slot| slot.to_string()).collect()
}
