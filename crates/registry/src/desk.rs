//! Reservation coordinator tying the three collections together.

use std::path::{Path, PathBuf};

use frontdesk_core::{Customer, Hotel, Reservation};

use crate::error::{DeskError, Result};
use crate::repository::{
    CustomerRepository, HotelRepository, Record, ReservationRepository,
};

/// Coordinator for the hotel, customer, and reservation collections.
///
/// `FrontDesk` enforces the one cross-collection invariant in the system:
/// active reservations against a hotel plus that hotel's current
/// `rooms_available` add up to its original capacity. It does so by pairing
/// every reservation record mutation with the matching room-count mutation,
/// each persisted as a full-collection write.
///
/// The desk assumes a single caller at a time. There is no locking between
/// the reload and persist halves of an operation, so concurrent desks over
/// the same data directory can lose writes.
pub struct FrontDesk {
    data_dir: PathBuf,
    hotels: HotelRepository,
    customers: CustomerRepository,
    reservations: ReservationRepository,
}

impl FrontDesk {
    /// Open a desk over a data directory holding the three collection files.
    ///
    /// Nothing is created up front; each collection file appears on its
    /// first persisted write.
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            hotels: HotelRepository::new(&data_dir),
            customers: CustomerRepository::new(&data_dir),
            reservations: ReservationRepository::new(&data_dir),
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn hotels(&self) -> &HotelRepository {
        &self.hotels
    }

    pub fn customers(&self) -> &CustomerRepository {
        &self.customers
    }

    pub fn reservations(&self) -> &ReservationRepository {
        &self.reservations
    }

    /// Register a hotel with its initial room capacity.
    pub fn register_hotel(
        &self,
        hotel_id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        rooms_available: u32,
    ) -> Result<Hotel> {
        self.hotels.create(hotel_id, name, location, rooms_available)
    }

    /// Register a customer.
    pub fn register_customer(
        &self,
        customer_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Customer> {
        self.customers.create(customer_id, name, email)
    }

    /// Reserve a room at `hotel_id` for `customer_id`.
    ///
    /// Checks run in a fixed order before anything is touched: reservation
    /// id free, customer exists, hotel exists, hotel has capacity. Only once
    /// all four pass is the hotel collection persisted with the decremented
    /// count and the reservation appended, so a failing path mutates
    /// nothing.
    pub fn reserve(
        &self,
        reservation_id: &str,
        customer_id: &str,
        hotel_id: &str,
    ) -> Result<Reservation> {
        if self.reservations.find(reservation_id).is_some() {
            return Err(DeskError::DuplicateKey {
                kind: Reservation::KIND,
                id: reservation_id.to_string(),
            });
        }

        if self.customers.find(customer_id).is_none() {
            return Err(DeskError::CustomerNotFound(customer_id.to_string()));
        }

        let hotel = self
            .hotels
            .find(hotel_id)
            .ok_or_else(|| DeskError::HotelNotFound(hotel_id.to_string()))?;

        if hotel.rooms_available == 0 {
            return Err(DeskError::NoRoomsAvailable(hotel_id.to_string()));
        }

        self.hotels
            .collection()
            .update(hotel_id, |h| h.rooms_available -= 1);

        let reservation = self
            .reservations
            .collection()
            .create(Reservation::new(reservation_id, customer_id, hotel_id))?;

        tracing::info!(
            "Reserved room at hotel '{}' for customer '{}' (reservation '{}')",
            hotel_id,
            customer_id,
            reservation_id
        );

        Ok(reservation)
    }

    /// Cancel a reservation, restoring the hotel's room count.
    ///
    /// If the referenced hotel record was deleted in the meantime the room
    /// is not restored anywhere; the reservation is still removed and the
    /// orphaned reference is logged.
    pub fn cancel(&self, reservation_id: &str) -> Result<Reservation> {
        let reservation = self
            .reservations
            .find(reservation_id)
            .ok_or_else(|| DeskError::ReservationNotFound(reservation_id.to_string()))?;

        let restored = self
            .hotels
            .collection()
            .update(&reservation.hotel_id, |h| h.rooms_available += 1);
        if !restored {
            tracing::warn!(
                "Hotel '{}' no longer exists; room for cancelled reservation '{}' cannot be restored",
                reservation.hotel_id,
                reservation_id
            );
        }

        self.reservations.collection().delete(reservation_id);

        tracing::info!("Cancelled reservation '{}'", reservation_id);

        Ok(reservation)
    }
}
