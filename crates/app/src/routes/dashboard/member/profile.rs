use crate::auth::use_auth;
use dioxus::prelude::*;

/// Member profile: identity plus membership tenure.
#[component]
pub fn MemberProfile() -> Element {
    let auth = use_auth();
    let Some(user) = auth.current_user() else {
        return rsx! { crate::components::Loading {} };
    };

    let registered = user.registered_at.format("%b %e, %Y").to_string();
    let member_since = user
        .member_since
        .map(|at| at.format("%b %e, %Y").to_string());

    rsx! {
        div { class: "card profile-card",
            h2 { "{user.display_name}" }
            p { class: "muted", "{user.email}" }
            p {
                "Joined "
                span { class: "badge", "{registered}" }
            }
            if let Some(since) = member_since {
                p {
                    "Member since "
                    span { class: "badge accent", "{since}" }
                }
            }
        }
    }
}
