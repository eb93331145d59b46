//! Reservation collection repository.
//!
//! Unlike the hotel and customer repositories this one exposes no create
//! operation: reservation records enter and leave the collection only
//! through the coordinator, which pairs them with hotel room-count
//! mutations.

use std::path::Path;

use frontdesk_core::Reservation;

use crate::repository::{CollectionRepository, Record};

pub(crate) const RESERVATIONS_FILE: &str = "reservations.json";

impl Record for Reservation {
    const KIND: &'static str = "reservation";

    fn key(&self) -> &str {
        &self.reservation_id
    }
}

/// Typed view over the reservation collection.
pub struct ReservationRepository {
    inner: CollectionRepository<Reservation>,
}

impl ReservationRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            inner: CollectionRepository::new(base_dir, RESERVATIONS_FILE),
        }
    }

    pub fn find(&self, reservation_id: &str) -> Option<Reservation> {
        self.inner.find(reservation_id)
    }

    pub fn display(&self, reservation_id: &str) -> Option<String> {
        self.inner.display(reservation_id)
    }

    pub(crate) fn collection(&self) -> &CollectionRepository<Reservation> {
        &self.inner
    }
}
