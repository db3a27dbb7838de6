use crate::auth::use_auth;
use dioxus::prelude::*;

/// Profile page for accounts still on the user role.
#[component]
pub fn UserProfile() -> Element {
    let auth = use_auth();
    let Some(user) = auth.current_user() else {
        return rsx! { crate::components::Loading {} };
    };

    let registered = user.registered_at.format("%b %e, %Y").to_string();

    rsx! {
        div { class: "card profile-card",
            h2 { "{user.display_name}" }
            p { class: "muted", "{user.email}" }
            p {
                "Joined "
                span { class: "badge", "{registered}" }
            }
            p { class: "muted",
                "Get a booking approved to unlock membership — approved and "
                "confirmed bookings, payments and seasonal rates."
            }
        }
    }
}
