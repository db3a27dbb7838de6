//! Booking lifecycle: request, approval (with member promotion), rejection
//! and cancellation rules.

use crate::common::{register_account, seed_court};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use server::store::AppStore;
use shared_types::{AppErrorKind, BookingStatus, CreateBookingRequest, Role};

fn booking_request(court_id: i64) -> CreateBookingRequest {
    CreateBookingRequest {
        court_id,
        date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
        slots: vec!["18:00 - 19:00".to_string()],
    }
}

#[test]
fn new_booking_is_pending_and_priced_per_slot() {
    let store = AppStore::new();
    let user = register_account(&store, "Uri", "uri@courtside.club", Role::User);
    let court = seed_court(&store, "Centre Court", 20.0);

    let booking = store
        .create_booking(
            &user,
            &CreateBookingRequest {
                court_id: court.id,
                date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
                slots: vec!["18:00 - 19:00".to_string(), "19:00 - 20:00".to_string()],
            },
        )
        .unwrap();

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.price, 40.0);
    assert_eq!(booking.user_email, user.email);
}

#[test]
fn unknown_slot_is_rejected() {
    let store = AppStore::new();
    let user = register_account(&store, "Uri", "uri@courtside.club", Role::User);
    let court = seed_court(&store, "Centre Court", 20.0);

    let err = store
        .create_booking(
            &user,
            &CreateBookingRequest {
                court_id: court.id,
                date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
                slots: vec!["03:00 - 04:00".to_string()],
            },
        )
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}

#[test]
fn approval_promotes_a_user_to_member() {
    let store = AppStore::new();
    let user = register_account(&store, "Uri", "uri@courtside.club", Role::User);
    let court = seed_court(&store, "Centre Court", 20.0);
    let booking = store.create_booking(&user, &booking_request(court.id)).unwrap();

    let approved = store.approve_booking(booking.id).unwrap();
    assert_eq!(approved.status, BookingStatus::Approved);
    assert_eq!(store.role_of(user.id), Some(Role::Member));
    assert!(store.user(user.id).unwrap().member_since.is_some());
}

#[test]
fn approval_does_not_touch_admin_roles() {
    let store = AppStore::new();
    let admin = register_account(&store, "Ada", "ada@courtside.club", Role::Admin);
    let court = seed_court(&store, "Centre Court", 20.0);
    let booking = store.create_booking(&admin, &booking_request(court.id)).unwrap();

    store.approve_booking(booking.id).unwrap();
    assert_eq!(store.role_of(admin.id), Some(Role::Admin));
}

#[test]
fn approving_twice_is_a_conflict() {
    let store = AppStore::new();
    let user = register_account(&store, "Uri", "uri@courtside.club", Role::User);
    let court = seed_court(&store, "Centre Court", 20.0);
    let booking = store.create_booking(&user, &booking_request(court.id)).unwrap();

    store.approve_booking(booking.id).unwrap();
    let err = store.approve_booking(booking.id).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
}

#[test]
fn rejection_removes_the_pending_booking() {
    let store = AppStore::new();
    let user = register_account(&store, "Uri", "uri@courtside.club", Role::User);
    let court = seed_court(&store, "Centre Court", 20.0);
    let booking = store.create_booking(&user, &booking_request(court.id)).unwrap();

    store.reject_booking(booking.id).unwrap();
    assert!(store.booking(booking.id).is_none());
    assert_eq!(store.role_of(user.id), Some(Role::User));
}

#[test]
fn cancelling_someone_elses_booking_is_forbidden() {
    let store = AppStore::new();
    let owner = register_account(&store, "Uri", "uri@courtside.club", Role::User);
    let other = register_account(&store, "Eve", "eve@courtside.club", Role::User);
    let court = seed_court(&store, "Centre Court", 20.0);
    let booking = store.create_booking(&owner, &booking_request(court.id)).unwrap();

    let err = store.cancel_booking(other.id, booking.id).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert!(store.booking(booking.id).is_some());
}

#[test]
fn status_listings_partition_bookings() {
    let store = AppStore::new();
    let user = register_account(&store, "Uri", "uri@courtside.club", Role::User);
    let court = seed_court(&store, "Centre Court", 20.0);
    let first = store.create_booking(&user, &booking_request(court.id)).unwrap();
    let second = store.create_booking(&user, &booking_request(court.id)).unwrap();
    store.approve_booking(first.id).unwrap();

    let pending = store.bookings_for(user.id, Some(BookingStatus::Pending));
    let approved = store.bookings_for(user.id, Some(BookingStatus::Approved));
    assert_eq!(pending.iter().map(|b| b.id).collect::<Vec<_>>(), vec![second.id]);
    assert_eq!(approved.iter().map(|b| b.id).collect::<Vec<_>>(), vec![first.id]);
    assert_eq!(store.bookings_by_status(BookingStatus::Pending).len(), 1);
}
