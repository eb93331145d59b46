//! Reload-per-call collection repositories over the record store.
//!
//! Each repository rebuilds its full collection from storage at the start of
//! every operation and persists the full collection after every mutation.
//! Nothing is cached between calls, so the collection a call sees is always
//! whatever the last successful write left on disk.

mod customer;
mod hotel;
mod reservation;

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DeskError, Result};
use crate::store::RecordStore;

pub use customer::CustomerRepository;
pub use hotel::HotelRepository;
pub use reservation::ReservationRepository;

/// A flat record persisted in one of the collection files.
pub trait Record: Serialize + DeserializeOwned + Clone + fmt::Display {
    /// Label used in error and log messages ("hotel", "customer", ...).
    const KIND: &'static str;

    /// The unique collection key.
    fn key(&self) -> &str;
}

/// Generic reload-per-call repository for one record type.
///
/// Storage faults degrade here: an unreadable file loads as an empty
/// collection and a failed write is logged and skipped, both with a warning.
/// Individual records that no longer match the expected shape are dropped
/// from the loaded collection, which means they disappear for good on the
/// next persisted write.
pub struct CollectionRepository<T: Record> {
    store: RecordStore,
    _phantom: PhantomData<T>,
}

impl<T: Record> CollectionRepository<T> {
    pub fn new(base_dir: impl AsRef<Path>, filename: impl AsRef<str>) -> Self {
        Self {
            store: RecordStore::new(base_dir.as_ref().join(filename.as_ref())),
            _phantom: PhantomData,
        }
    }

    /// Load the current collection, skipping records that fail to parse.
    pub fn load(&self) -> Vec<T> {
        let raw = match self.store.read() {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    "Unreadable {} store at {}: {}. Treating collection as empty",
                    T::KIND,
                    self.store.path().display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut records = Vec::with_capacity(raw.len());
        for value in raw {
            match serde_json::from_value::<T>(value.clone()) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping malformed {} record {}: {}", T::KIND, value, e);
                }
            }
        }
        records
    }

    /// Persist the full collection. Best-effort: a write failure is logged
    /// and the on-disk state is left at the last successful write.
    pub fn save(&self, records: &[T]) {
        if let Err(e) = self.store.write(records) {
            tracing::warn!(
                "Failed to save {} collection to {}: {}",
                T::KIND,
                self.store.path().display(),
                e
            );
        }
    }

    /// Append a record, failing if its key is already taken.
    pub fn create(&self, record: T) -> Result<T> {
        let mut records = self.load();
        if records.iter().any(|r| r.key() == record.key()) {
            return Err(DeskError::DuplicateKey {
                kind: T::KIND,
                id: record.key().to_string(),
            });
        }

        records.push(record.clone());
        self.save(&records);

        tracing::info!("Created {} '{}'", T::KIND, record.key());
        Ok(record)
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.load().into_iter().find(|r| r.key() == id)
    }

    /// Format the matching record for operator display.
    pub fn display(&self, id: &str) -> Option<String> {
        self.find(id).map(|r| r.to_string())
    }

    /// Apply `f` to the matching record and persist. Returns whether a match
    /// existed.
    pub fn update(&self, id: &str, f: impl FnOnce(&mut T)) -> bool {
        let mut records = self.load();
        let Some(record) = records.iter_mut().find(|r| r.key() == id) else {
            return false;
        };

        f(record);
        self.save(&records);
        true
    }

    /// Remove the matching record. Persists only if a removal happened.
    pub fn delete(&self, id: &str) -> bool {
        let mut records = self.load();
        let before = records.len();
        records.retain(|r| r.key() != id);

        if records.len() == before {
            return false;
        }

        self.save(&records);
        tracing::info!("Deleted {} '{}'", T::KIND, id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_core::Hotel;
    use tempfile::TempDir;

    fn repo(dir: &TempDir) -> CollectionRepository<Hotel> {
        CollectionRepository::new(dir.path(), "hotels.json")
    }

    #[test]
    fn create_then_find_round_trips() {
        let dir = TempDir::new().unwrap();
        let hotels = repo(&dir);

        hotels.create(Hotel::new("H1", "Grand", "Lisbon", 12)).unwrap();

        // A fresh repository over the same file sees the persisted record.
        let reloaded = repo(&dir).find("H1").unwrap();
        assert_eq!(reloaded, Hotel::new("H1", "Grand", "Lisbon", 12));
    }

    #[test]
    fn duplicate_create_leaves_one_record() {
        let dir = TempDir::new().unwrap();
        let hotels = repo(&dir);

        hotels.create(Hotel::new("H1", "Grand", "Lisbon", 12)).unwrap();
        let err = hotels
            .create(Hotel::new("H1", "Other", "Porto", 3))
            .unwrap_err();

        assert_eq!(
            err,
            DeskError::DuplicateKey {
                kind: "hotel",
                id: "H1".to_string()
            }
        );
        let records = hotels.load();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Grand");
    }

    #[test]
    fn update_misses_unknown_id() {
        let dir = TempDir::new().unwrap();
        let hotels = repo(&dir);

        assert!(!hotels.update("H9", |h| h.rooms_available = 0));
    }

    #[test]
    fn delete_reports_whether_a_removal_happened() {
        let dir = TempDir::new().unwrap();
        let hotels = repo(&dir);
        hotels.create(Hotel::new("H1", "Grand", "Lisbon", 12)).unwrap();

        assert!(hotels.delete("H1"));
        assert!(!hotels.delete("H1"));
        assert!(hotels.load().is_empty());
    }

    #[test]
    fn malformed_record_is_skipped_and_dropped_on_next_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hotels.json");
        std::fs::write(
            &path,
            r#"[
                {"hotel_id": "H1", "name": "Grand", "location": "Lisbon", "rooms_available": 12},
                {"hotel_id": "H2", "name": "No Rooms Field"}
            ]"#,
        )
        .unwrap();

        let hotels = repo(&dir);
        let records = hotels.load();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hotel_id, "H1");

        // Any persisted write serializes only the surviving records.
        assert!(hotels.update("H1", |h| h.rooms_available = 11));
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("H2"));
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("hotels.json"), "not json at all").unwrap();

        assert!(repo(&dir).load().is_empty());
    }

    #[test]
    fn display_formats_the_match() {
        let dir = TempDir::new().unwrap();
        let hotels = repo(&dir);
        hotels.create(Hotel::new("H1", "Grand", "Lisbon", 12)).unwrap();

        let line = hotels.display("H1").unwrap();
        assert_eq!(line, "ID: H1, Name: Grand, Location: Lisbon, Rooms available: 12");
        assert!(hotels.display("H9").is_none());
    }
}
