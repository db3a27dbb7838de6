//! Paying approved bookings: confirmation, coupon discounts, guard rails.

use crate::common::{register_account, seed_court};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use server::store::{AppStore, UserRecord};
use shared_types::{
    AppErrorKind, Booking, BookingStatus, CouponInput, CreateBookingRequest, PayBookingRequest,
    Role,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
}

fn approved_booking(store: &AppStore, user: &UserRecord, price: f64) -> Booking {
    let court = seed_court(store, "Centre Court", price);
    let booking = store
        .create_booking(
            user,
            &CreateBookingRequest {
                court_id: court.id,
                date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
                slots: vec!["18:00 - 19:00".to_string()],
            },
        )
        .unwrap();
    store.approve_booking(booking.id).unwrap()
}

#[test]
fn paying_confirms_the_booking_and_records_history() {
    let store = AppStore::new();
    let member = register_account(&store, "Mia", "mia@courtside.club", Role::Member);
    let booking = approved_booking(&store, &member, 25.0);

    let payment = store
        .pay_booking(
            member.id,
            &PayBookingRequest {
                booking_id: booking.id,
                coupon_code: None,
            },
            today(),
        )
        .unwrap();

    assert_eq!(payment.amount, 25.0);
    assert_eq!(
        store.booking(booking.id).unwrap().status,
        BookingStatus::Confirmed
    );

    let history = store.payments_for(member.id);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].booking_id, booking.id);
}

#[test]
fn coupon_discount_is_applied_and_recorded() {
    let store = AppStore::new();
    let member = register_account(&store, "Mia", "mia@courtside.club", Role::Member);
    let booking = approved_booking(&store, &member, 40.0);
    store
        .create_coupon(&CouponInput {
            code: "SMASH10".to_string(),
            discount_percent: 10,
            description: "Welcome".to_string(),
            expires_at: None,
        })
        .unwrap();

    let payment = store
        .pay_booking(
            member.id,
            &PayBookingRequest {
                booking_id: booking.id,
                coupon_code: Some("smash10".to_string()),
            },
            today(),
        )
        .unwrap();

    assert_eq!(payment.amount, 36.0);
    assert_eq!(payment.coupon_code.as_deref(), Some("SMASH10"));
}

#[test]
fn expired_coupon_is_rejected_without_confirming() {
    let store = AppStore::new();
    let member = register_account(&store, "Mia", "mia@courtside.club", Role::Member);
    let booking = approved_booking(&store, &member, 40.0);
    store
        .create_coupon(&CouponInput {
            code: "OLD".to_string(),
            discount_percent: 50,
            description: "Last season".to_string(),
            expires_at: NaiveDate::from_ymd_opt(2026, 7, 31),
        })
        .unwrap();

    let err = store
        .pay_booking(
            member.id,
            &PayBookingRequest {
                booking_id: booking.id,
                coupon_code: Some("OLD".to_string()),
            },
            today(),
        )
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(
        store.booking(booking.id).unwrap().status,
        BookingStatus::Approved
    );
}

#[test]
fn pending_bookings_cannot_be_paid() {
    let store = AppStore::new();
    let member = register_account(&store, "Mia", "mia@courtside.club", Role::Member);
    let court = seed_court(&store, "Court 2", 15.0);
    let booking = store
        .create_booking(
            &member,
            &CreateBookingRequest {
                court_id: court.id,
                date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
                slots: vec!["18:00 - 19:00".to_string()],
            },
        )
        .unwrap();

    let err = store
        .pay_booking(
            member.id,
            &PayBookingRequest {
                booking_id: booking.id,
                coupon_code: None,
            },
            today(),
        )
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
}

#[test]
fn paying_someone_elses_booking_is_forbidden() {
    let store = AppStore::new();
    let owner = register_account(&store, "Mia", "mia@courtside.club", Role::Member);
    let other = register_account(&store, "Eve", "eve@courtside.club", Role::Member);
    let booking = approved_booking(&store, &owner, 25.0);

    let err = store
        .pay_booking(
            other.id,
            &PayBookingRequest {
                booking_id: booking.id,
                coupon_code: None,
            },
            today(),
        )
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
}

#[test]
fn confirmed_bookings_cannot_be_cancelled() {
    let store = AppStore::new();
    let member = register_account(&store, "Mia", "mia@courtside.club", Role::Member);
    let booking = approved_booking(&store, &member, 25.0);
    store
        .pay_booking(
            member.id,
            &PayBookingRequest {
                booking_id: booking.id,
                coupon_code: None,
            },
            today(),
        )
        .unwrap();

    let err = store.cancel_booking(member.id, booking.id).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
}
