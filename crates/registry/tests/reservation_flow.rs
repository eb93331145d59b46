//! End-to-end reservation lifecycle scenarios over a real data directory.

use frontdesk_core::Hotel;
use frontdesk_registry::{DeskError, FrontDesk, HotelRepository};
use tempfile::TempDir;

fn desk() -> (TempDir, FrontDesk) {
    let dir = TempDir::new().unwrap();
    let desk = FrontDesk::open(dir.path());
    (dir, desk)
}

#[test]
fn full_reservation_lifecycle() {
    let (_dir, desk) = desk();

    desk.register_hotel("H1", "Grand", "Lisbon", 2).unwrap();
    desk.register_customer("C1", "Ada", "ada@example.com").unwrap();

    // Reserve: room count drops by one.
    let reservation = desk.reserve("R1", "C1", "H1").unwrap();
    assert_eq!(reservation.customer_id, "C1");
    assert_eq!(desk.hotels().find("H1").unwrap().rooms_available, 1);
    assert!(desk.reservations().find("R1").is_some());

    // Cancel: room count restored, record gone.
    desk.cancel("R1").unwrap();
    assert_eq!(desk.hotels().find("H1").unwrap().rooms_available, 2);
    assert!(desk.reservations().find("R1").is_none());

    // Cancelling again fails and changes nothing.
    assert_eq!(
        desk.cancel("R1").unwrap_err(),
        DeskError::ReservationNotFound("R1".to_string())
    );
    assert_eq!(desk.hotels().find("H1").unwrap().rooms_available, 2);
}

#[test]
fn exhausted_hotel_rejects_reservation_without_side_effects() {
    let (dir, desk) = desk();

    desk.register_hotel("H1", "Grand", "Lisbon", 1).unwrap();
    desk.register_customer("C1", "Ada", "ada@example.com").unwrap();
    desk.register_customer("C2", "Grace", "grace@example.com").unwrap();

    desk.reserve("R1", "C1", "H1").unwrap();
    assert_eq!(desk.hotels().find("H1").unwrap().rooms_available, 0);

    let err = desk.reserve("R2", "C2", "H1").unwrap_err();
    assert_eq!(err, DeskError::NoRoomsAvailable("H1".to_string()));

    // Persisted state is untouched by the failed attempt: a fresh desk over
    // the same directory sees one reservation and a count of zero.
    let fresh = FrontDesk::open(dir.path());
    assert_eq!(fresh.hotels().find("H1").unwrap().rooms_available, 0);
    assert!(fresh.reservations().find("R2").is_none());
    assert!(fresh.reservations().find("R1").is_some());
}

#[test]
fn customer_check_runs_before_hotel_lookup() {
    let (_dir, desk) = desk();

    // Both ids are unknown; the customer failure must win.
    let err = desk.reserve("R1", "nobody", "nowhere").unwrap_err();
    assert_eq!(err, DeskError::CustomerNotFound("nobody".to_string()));

    // Same ordering when the hotel exists but the customer does not.
    desk.register_hotel("H1", "Grand", "Lisbon", 5).unwrap();
    let err = desk.reserve("R1", "nobody", "H1").unwrap_err();
    assert_eq!(err, DeskError::CustomerNotFound("nobody".to_string()));
    assert_eq!(desk.hotels().find("H1").unwrap().rooms_available, 5);
}

#[test]
fn unknown_hotel_is_reported_after_the_customer_check() {
    let (_dir, desk) = desk();

    desk.register_customer("C1", "Ada", "ada@example.com").unwrap();
    let err = desk.reserve("R1", "C1", "nowhere").unwrap_err();
    assert_eq!(err, DeskError::HotelNotFound("nowhere".to_string()));
    assert!(desk.reservations().find("R1").is_none());
}

#[test]
fn duplicate_reservation_id_is_rejected_before_any_mutation() {
    let (_dir, desk) = desk();

    desk.register_hotel("H1", "Grand", "Lisbon", 3).unwrap();
    desk.register_customer("C1", "Ada", "ada@example.com").unwrap();
    desk.reserve("R1", "C1", "H1").unwrap();

    let err = desk.reserve("R1", "C1", "H1").unwrap_err();
    assert_eq!(
        err,
        DeskError::DuplicateKey {
            kind: "reservation",
            id: "R1".to_string()
        }
    );
    // The failed attempt must not have decremented the count again.
    assert_eq!(desk.hotels().find("H1").unwrap().rooms_available, 2);
}

#[test]
fn cancelling_after_hotel_deletion_drops_the_reservation() {
    let (_dir, desk) = desk();

    desk.register_hotel("H1", "Grand", "Lisbon", 2).unwrap();
    desk.register_customer("C1", "Ada", "ada@example.com").unwrap();
    desk.reserve("R1", "C1", "H1").unwrap();

    // Orphan the reservation by deleting the hotel underneath it.
    assert!(desk.hotels().delete("H1"));

    desk.cancel("R1").unwrap();
    assert!(desk.reservations().find("R1").is_none());
    assert!(desk.hotels().find("H1").is_none());
}

#[test]
fn hotel_round_trips_through_storage() {
    let (dir, desk) = desk();

    desk.register_hotel("H1", "Grand", "Lisbon", 7).unwrap();

    let reloaded = HotelRepository::new(dir.path()).find("H1").unwrap();
    assert_eq!(reloaded, Hotel::new("H1", "Grand", "Lisbon", 7));
}

#[test]
fn corrupt_collection_file_degrades_to_empty() {
    let (dir, desk) = desk();

    std::fs::write(dir.path().join("hotels.json"), "]]garbage{{").unwrap();

    assert!(desk.hotels().find("H1").is_none());
    // Registering through the desk still works and rewrites the file.
    desk.register_hotel("H1", "Grand", "Lisbon", 2).unwrap();
    assert_eq!(desk.hotels().find("H1").unwrap().rooms_available, 2);
}
