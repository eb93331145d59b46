//! Reservation records linking a customer to a hotel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A room reservation.
///
/// Reservations are only ever created and removed through the coordinator,
/// which pairs each record mutation with the matching hotel room-count
/// mutation. `customer_id` and `hotel_id` reference records that existed at
/// creation time; nothing prevents those records from being deleted later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: String,
    pub customer_id: String,
    pub hotel_id: String,
}

impl Reservation {
    pub fn new(
        reservation_id: impl Into<String>,
        customer_id: impl Into<String>,
        hotel_id: impl Into<String>,
    ) -> Self {
        Self {
            reservation_id: reservation_id.into(),
            customer_id: customer_id.into(),
            hotel_id: hotel_id.into(),
        }
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation: {}, Customer: {}, Hotel: {}",
            self.reservation_id, self.customer_id, self.hotel_id
        )
    }
}
