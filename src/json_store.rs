use crate::{
    backend::BookingBackend,
    error::{BookingError, StoreError},
    types::Booking,
};
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tempfile::NamedTempFile;
use tracing::{error, info, warn};

/// Bookings held in memory and mirrored to a single JSON file, rewritten in
/// full after every successful booking.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: Arc<PathBuf>,
    bookings: Arc<Mutex<Vec<Booking>>>,
}

impl JsonFileStore {
    /// Never fails: a missing or unreadable file starts an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let bookings = match read_bookings(&path) {
            Ok(bookings) => {
                info!(path = %path.display(), count = bookings.len(), "Loaded bookings");
                bookings
            }
            Err(StoreError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "No booking store yet, starting empty");
                vec![]
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "Booking store is unreadable, starting empty");
                vec![]
            }
        };
        Self {
            path: Arc::new(path),
            bookings: Arc::new(Mutex::new(bookings)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Booking>> {
        self.bookings.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BookingBackend for JsonFileStore {
    fn bookings(&self) -> Vec<Booking> {
        self.lock().clone()
    }

    fn book_slot(&self, booking: Booking) -> Result<(), BookingError> {
        let mut bookings = self.lock();
        if bookings
            .iter()
            .any(|existing| existing.occupies(&booking.date, &booking.slot))
        {
            return Err(BookingError::SlotTaken);
        }

        bookings.push(booking);
        if let Err(err) = save_bookings(&self.path, &bookings) {
            error!(path = %self.path.display(), %err, "Failed to save bookings");
            bookings.pop();
            return Err(err.into());
        }
        Ok(())
    }
}

fn read_bookings(path: &Path) -> Result<Vec<Booking>, StoreError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Writes next to the target and renames over it, so readers never see a
/// half-written store.
fn save_bookings(path: &Path, bookings: &[Booking]) -> Result<(), StoreError> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(directory)?;
    serde_json::to_writer_pretty(&mut file, bookings)?;
    file.flush()?;
    file.as_file().sync_all()?;
    file.persist(path)?;
    Ok(())
}
