//! Hotel collection repository.

use std::path::Path;

use frontdesk_core::{Hotel, HotelPatch};

use crate::error::Result;
use crate::repository::{CollectionRepository, Record};

pub(crate) const HOTELS_FILE: &str = "hotels.json";

impl Record for Hotel {
    const KIND: &'static str = "hotel";

    fn key(&self) -> &str {
        &self.hotel_id
    }
}

/// Typed view over the hotel collection.
pub struct HotelRepository {
    inner: CollectionRepository<Hotel>,
}

impl HotelRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            inner: CollectionRepository::new(base_dir, HOTELS_FILE),
        }
    }

    /// Register a hotel with its initial room capacity.
    pub fn create(
        &self,
        hotel_id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        rooms_available: u32,
    ) -> Result<Hotel> {
        self.inner
            .create(Hotel::new(hotel_id, name, location, rooms_available))
    }

    pub fn find(&self, hotel_id: &str) -> Option<Hotel> {
        self.inner.find(hotel_id)
    }

    pub fn display(&self, hotel_id: &str) -> Option<String> {
        self.inner.display(hotel_id)
    }

    /// Apply the supplied fields to the matching hotel. Returns whether the
    /// hotel existed.
    pub fn modify(&self, hotel_id: &str, patch: &HotelPatch) -> bool {
        self.inner.update(hotel_id, |hotel| patch.apply(hotel))
    }

    pub fn delete(&self, hotel_id: &str) -> bool {
        self.inner.delete(hotel_id)
    }

    pub(crate) fn collection(&self) -> &CollectionRepository<Hotel> {
        &self.inner
    }
}
