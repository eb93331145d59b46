//! Hotel records and their partial-update patch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A hotel with a mutable count of rooms left to reserve.
///
/// `rooms_available` is unsigned, so the non-negative counter invariant is
/// structural; the coordinator checks capacity before every decrement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub hotel_id: String,
    pub name: String,
    pub location: String,
    pub rooms_available: u32,
}

impl Hotel {
    pub fn new(
        hotel_id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        rooms_available: u32,
    ) -> Self {
        Self {
            hotel_id: hotel_id.into(),
            name: name.into(),
            location: location.into(),
            rooms_available,
        }
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Location: {}, Rooms available: {}",
            self.hotel_id, self.name, self.location, self.rooms_available
        )
    }
}

/// Field-level patch applied by the hotel repository's modify operation.
///
/// `None` leaves a field unchanged; `Some(value)` always applies, so a name
/// or location can be cleared to the empty string deliberately.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HotelPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub rooms_available: Option<u32>,
}

impl HotelPatch {
    pub fn apply(&self, hotel: &mut Hotel) {
        if let Some(name) = &self.name {
            hotel.name = name.clone();
        }
        if let Some(location) = &self.location {
            hotel.location = location.clone();
        }
        if let Some(rooms) = self.rooms_available {
            hotel.rooms_available = rooms;
        }
    }
}
