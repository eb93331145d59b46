//! Domain record types shared across the frontdesk crates.
//!
//! `frontdesk-core` defines the three persisted record shapes (hotels,
//! customers, reservations) together with the patch types used for partial
//! modification. The field names on these structs are contract surface: they
//! match the keys written to the JSON collection files, so external tooling
//! reading those files depends on them staying stable.
pub mod customer;
pub mod hotel;
pub mod reservation;

pub use customer::{Customer, CustomerPatch};
pub use hotel::{Hotel, HotelPatch};
pub use reservation::Reservation;
