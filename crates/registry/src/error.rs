//! Failure results returned by repositories and the coordinator.
//!
//! Storage faults never appear here: the store layer degrades them to empty
//! collections or skipped writes with a logged message. Everything below is
//! a caller-visible outcome to be checked, not unwound.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeskError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeskError {
    #[error("{kind} '{id}' already exists")]
    DuplicateKey { kind: &'static str, id: String },

    #[error("customer '{0}' not found")]
    CustomerNotFound(String),

    #[error("hotel '{0}' not found")]
    HotelNotFound(String),

    #[error("reservation '{0}' not found")]
    ReservationNotFound(String),

    #[error("hotel '{0}' has no rooms available")]
    NoRoomsAvailable(String),
}
