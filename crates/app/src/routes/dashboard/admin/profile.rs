use crate::auth::use_auth;
use crate::components::Loading;
use dioxus::prelude::*;

/// Admin profile: identity card plus the club counters.
#[component]
pub fn AdminProfile() -> Element {
    let auth = use_auth();
    let stats = use_server_future(move || async move { server::api::get_club_stats().await })?;
    let stats_result = stats.read().as_ref().cloned();

    let Some(user) = auth.current_user() else {
        return rsx! { Loading {} };
    };
    let registered = user.registered_at.format("%b %e, %Y").to_string();

    rsx! {
        div { class: "card profile-card",
            h2 { "{user.display_name}" }
            p { class: "muted", "{user.email}" }
            p {
                "Administrator since "
                span { class: "badge", "{registered}" }
            }
        }

        match stats_result {
            None => rsx! { Loading {} },
            Some(Err(e)) => rsx! {
                p { class: "error-text", {shared_types::AppError::friendly_message(&e.to_string())} }
            },
            Some(Ok(stats)) => rsx! {
                div { class: "stats-grid",
                    div { class: "card",
                        div { class: "stat-value", "{stats.total_courts}" }
                        div { class: "stat-label", "Courts" }
                    }
                    div { class: "card",
                        div { class: "stat-value", "{stats.total_users}" }
                        div { class: "stat-label", "Accounts" }
                    }
                    div { class: "card",
                        div { class: "stat-value", "{stats.total_members}" }
                        div { class: "stat-label", "Members" }
                    }
                }
            },
        }
    }
}
