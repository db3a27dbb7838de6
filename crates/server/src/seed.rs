//! Demo data seeding, enabled via `[demo] seed = true` in `config.toml`.

use crate::auth::password::hash_password;
use crate::store::AppStore;
use shared_types::{AnnouncementInput, CouponInput, CourtInput, RegisterRequest, Role};

const DEMO_PASSWORD: &str = "courtside-demo";

fn standard_slots() -> Vec<String> {
    [
        "06:00 - 07:00",
        "07:00 - 08:00",
        "08:00 - 09:00",
        "17:00 - 18:00",
        "18:00 - 19:00",
        "19:00 - 20:00",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Populate an empty store with demo accounts, courts, a coupon and an
/// announcement. Does nothing when any account already exists.
pub fn seed_demo_data(store: &AppStore) {
    if !store.list_accounts().is_empty() {
        return;
    }

    let accounts = [
        ("Ada Admin", "admin@courtside.club", Role::Admin),
        ("Mia Member", "member@courtside.club", Role::Member),
        ("Uri User", "user@courtside.club", Role::User),
    ];
    for (name, email, role) in accounts {
        let hash = match hash_password(DEMO_PASSWORD) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::error!("demo seeding aborted, could not hash password: {e}");
                return;
            }
        };
        let req = RegisterRequest {
            display_name: name.to_string(),
            email: email.to_string(),
            password: DEMO_PASSWORD.to_string(),
        };
        match store.register(&req, hash, Role::User) {
            Ok(user) => {
                if role != Role::User {
                    let _ = store.set_role(user.id, role);
                }
            }
            Err(e) => tracing::warn!("demo account {email} not seeded: {e}"),
        }
    }

    let courts = [
        ("Centre Court", "tennis", 28.0),
        ("Court 2", "tennis", 18.0),
        ("Badminton Hall A", "badminton", 12.0),
        ("Squash Box 1", "squash", 15.0),
    ];
    for (name, court_type, price) in courts {
        store.create_court(&CourtInput {
            name: name.to_string(),
            court_type: court_type.to_string(),
            price_per_slot: price,
            image_url: None,
            slots: standard_slots(),
        });
    }

    if let Err(e) = store.create_coupon(&CouponInput {
        code: "SMASH10".to_string(),
        discount_percent: 10,
        description: "Welcome discount for new members".to_string(),
        expires_at: None,
    }) {
        tracing::warn!("demo coupon not seeded: {e}");
    }

    store.create_announcement(&AnnouncementInput {
        title: "Season opening".to_string(),
        body: "All courts reopen this Saturday. Early-bird slots are live.".to_string(),
    });

    tracing::info!("seeded demo accounts, courts, coupon and announcement");
}
