//! Account lifecycle against the in-memory store: registration, login
//! verification, role transitions, deletion.

use crate::common::{register_account, TEST_PASSWORD};
use pretty_assertions::assert_eq;
use server::auth::password::verify_password;
use server::store::AppStore;
use shared_types::{AppErrorKind, RegisterRequest, Role};

#[test]
fn registration_starts_on_the_user_role() {
    let store = AppStore::new();
    let user = register_account(&store, "Nadia", "nadia@courtside.club", Role::User);
    assert_eq!(store.role_of(user.id), Some(Role::User));
    assert_eq!(user.member_since, None);
}

#[test]
fn duplicate_email_is_a_conflict() {
    let store = AppStore::new();
    register_account(&store, "Nadia", "nadia@courtside.club", Role::User);

    let req = RegisterRequest {
        display_name: "Other Nadia".to_string(),
        email: "NADIA@courtside.club".to_string(),
        password: TEST_PASSWORD.to_string(),
    };
    let err = store
        .register(&req, "unused-hash".to_string(), Role::User)
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
}

#[test]
fn stored_hash_verifies_the_original_password_only() {
    let store = AppStore::new();
    let user = register_account(&store, "Nadia", "nadia@courtside.club", Role::User);
    let record = store.user(user.id).unwrap();
    assert!(verify_password(TEST_PASSWORD, &record.password_hash).unwrap());
    assert!(!verify_password("wrong-password", &record.password_hash).unwrap());
}

#[test]
fn lookup_by_email_is_case_insensitive() {
    let store = AppStore::new();
    register_account(&store, "Nadia", "nadia@courtside.club", Role::User);
    assert!(store.user_by_email("Nadia@Courtside.Club").is_some());
    assert!(store.user_by_email("nobody@courtside.club").is_none());
}

#[test]
fn promoting_to_member_stamps_member_since() {
    let store = AppStore::new();
    let user = register_account(&store, "Nadia", "nadia@courtside.club", Role::User);
    store.set_role(user.id, Role::Member).unwrap();

    let record = store.user(user.id).unwrap();
    assert_eq!(record.role, Role::Member);
    assert!(record.member_since.is_some());
}

#[test]
fn demotion_keeps_the_original_member_since() {
    let store = AppStore::new();
    let user = register_account(&store, "Nadia", "nadia@courtside.club", Role::Member);
    let first_stamp = store.user(user.id).unwrap().member_since;

    store.set_role(user.id, Role::User).unwrap();
    store.set_role(user.id, Role::Member).unwrap();
    assert_eq!(store.user(user.id).unwrap().member_since, first_stamp);
}

#[test]
fn deleting_an_account_also_drops_its_bookings() {
    let store = AppStore::new();
    let user = register_account(&store, "Nadia", "nadia@courtside.club", Role::User);
    let court = crate::common::seed_court(&store, "Centre Court", 20.0);
    store
        .create_booking(
            &user,
            &shared_types::CreateBookingRequest {
                court_id: court.id,
                date: chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                slots: vec!["18:00 - 19:00".to_string()],
            },
        )
        .unwrap();

    store.delete_account(user.id).unwrap();
    assert!(store.user(user.id).is_none());
    assert!(store.bookings_for(user.id, None).is_empty());
}

#[test]
fn member_listing_only_contains_members() {
    let store = AppStore::new();
    register_account(&store, "Uri", "uri@courtside.club", Role::User);
    let member = register_account(&store, "Mia", "mia@courtside.club", Role::Member);
    register_account(&store, "Ada", "ada@courtside.club", Role::Admin);

    let members = store.list_members();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, member.id);
    assert_eq!(store.list_accounts().len(), 3);
}
