pub mod admin;
pub mod member;
pub mod user;

use crate::auth::use_auth;
use crate::role::use_role;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{Booking, RoleState, DASHBOARD_ROUTES};

/// Dashboard landing page, reachable by any authenticated session. Shows a
/// greeting and quick links filtered through the permission table, so the
/// shortcuts match exactly what the gates will let through.
#[component]
pub fn Overview() -> Element {
    let auth = use_auth();
    let role = use_role();

    let name = auth
        .current_user()
        .map(|u| u.display_name)
        .unwrap_or_else(|| "there".to_string());

    let role_label = match role {
        RoleState::Unresolved => "checking...".to_string(),
        RoleState::Known(r) => r.as_str().to_string(),
        RoleState::Failed => "unavailable".to_string(),
    };

    let table = &*DASHBOARD_ROUTES;

    rsx! {
        div { class: "card",
            h2 { "Welcome back, {name}" }
            p { class: "muted",
                "Signed in as "
                span { class: "badge accent", "{role_label}" }
            }
        }

        div { class: "card-grid",
            if table.allows("pending-bookings", &role) {
                div { class: "card",
                    h3 { "Bookings" }
                    p { class: "muted", "Track requests you are waiting on." }
                    Link { to: Route::PendingBookings {}, "Pending bookings" }
                }
            }
            if table.allows("payment", &role) {
                div { class: "card",
                    h3 { "Payments" }
                    p { class: "muted", "Pay for approved slots to confirm them." }
                    Link { to: Route::Payment {}, "Go to payment" }
                }
            }
            if table.allows("manage-bookings", &role) {
                div { class: "card",
                    h3 { "Approvals" }
                    p { class: "muted", "Booking requests waiting on review." }
                    Link { to: Route::ManageBookings {}, "Review queue" }
                }
            }
            if table.allows("announcements", &role) {
                div { class: "card",
                    h3 { "Announcements" }
                    p { class: "muted", "Club news and schedule changes." }
                    Link { to: Route::Announcements {}, "Read announcements" }
                }
            }
        }
    }
}

/// Read-only booking table shared by the listing pages.
#[component]
pub fn BookingTable(bookings: Vec<Booking>, show_email: bool) -> Element {
    if bookings.is_empty() {
        return rsx! {
            p { class: "muted", "Nothing here yet." }
        };
    }
    rsx! {
        table { class: "data",
            thead {
                tr {
                    th { "Court" }
                    th { "Date" }
                    th { "Slots" }
                    th { "Price" }
                    if show_email {
                        th { "Requested by" }
                    }
                }
            }
            tbody {
                for booking in bookings {
                    tr { key: "{booking.id}",
                        td { "{booking.court_name}" }
                        td { "{booking.date}" }
                        td { "{booking.slots.join(\", \")}" }
                        td { "${booking.price}" }
                        if show_email {
                            td { "{booking.user_email}" }
                        }
                    }
                }
            }
        }
    }
}
