//! Persistence and coordination for the frontdesk record collections.
//!
//! This crate wires the flat-file record store, the per-entity collection
//! repositories, and the reservation coordinator into one API. Consumers
//! embed [`FrontDesk`] to drive reservations and reach the individual
//! repositories for field-level CRUD.
//!
//! Modules are organized by responsibility:
//! - [`store`] moves raw records to and from one JSON file per collection
//! - [`repository`] layers typed, reload-per-call collections on the store
//! - [`desk`] hosts the coordinator that keeps the three collections
//!   mutually consistent
//!
//! The whole crate is synchronous and assumes a single caller at a time;
//! every operation is a self-contained reload-mutate-persist sequence with
//! no state retained in between.
pub mod desk;
pub mod repository;
pub mod store;

mod error;

pub use desk::FrontDesk;
pub use error::{DeskError, Result};
pub use repository::{
    CollectionRepository, CustomerRepository, HotelRepository, Record, ReservationRepository,
};
pub use store::{RecordStore, StoreError};
