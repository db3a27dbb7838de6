use server::auth::password::hash_password;
use server::store::{AppStore, UserRecord};
use shared_types::{Court, CourtInput, RegisterRequest, Role};

pub const TEST_PASSWORD: &str = "baseline-winner-9";

/// Register an account directly against a store, bypassing the HTTP layer.
pub fn register_account(store: &AppStore, name: &str, email: &str, role: Role) -> UserRecord {
    let hash = hash_password(TEST_PASSWORD).expect("hashing test password");
    let req = RegisterRequest {
        display_name: name.to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
    };
    let user = store
        .register(&req, hash, Role::User)
        .expect("registering test account");
    if role != Role::User {
        store.set_role(user.id, role).expect("setting test role");
        return store.user(user.id).expect("reloading test account");
    }
    user
}

/// Create a court with two evening slots.
pub fn seed_court(store: &AppStore, name: &str, price: f64) -> Court {
    store.create_court(&CourtInput {
        name: name.to_string(),
        court_type: "tennis".to_string(),
        price_per_slot: price,
        image_url: None,
        slots: vec!["18:00 - 19:00".to_string(), "19:00 - 20:00".to_string()],
    })
}
