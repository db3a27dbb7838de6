use crate::components::Loading;
use dioxus::prelude::*;

/// Admin approval queue. Approving a booking promotes its owner to member;
/// rejecting removes the request.
#[component]
pub fn ManageBookings() -> Element {
    let mut resource =
        use_server_future(move || async move { server::api::get_pending_approvals().await })?;
    let result = resource.read().as_ref().cloned();

    rsx! {
        match result {
            None => rsx! { Loading {} },
            Some(Err(e)) => rsx! {
                p { class: "error-text", {shared_types::AppError::friendly_message(&e.to_string())} }
            },
            Some(Ok(bookings)) => rsx! {
                if bookings.is_empty() {
                    p { class: "muted", "The approval queue is empty." }
                } else {
                    table { class: "data",
                        thead {
                            tr {
                                th { "Requested by" }
                                th { "Court" }
                                th { "Date" }
                                th { "Slots" }
                                th { "Price" }
                                th { "" }
                            }
                        }
                        tbody {
                            for booking in bookings {
                                tr { key: "{booking.id}",
                                    td { "{booking.user_email}" }
                                    td { "{booking.court_name}" }
                                    td { "{booking.date}" }
                                    td { "{booking.slots.join(\", \")}" }
                                    td { "${booking.price}" }
                                    td {
                                        div { class: "actions",
                                            button {
                                                class: "primary",
                                                onclick: {
                                                    let id = booking.id;
                                                    move |_| async move {
                                                        if server::api::approve_booking(id).await.is_ok() {
                                                            resource.restart();
                                                        }
                                                    }
                                                },
                                                "Approve"
                                            }
                                            button {
                                                class: "danger",
                                                onclick: {
                                                    let id = booking.id;
                                                    move |_| async move {
                                                        if server::api::reject_booking(id).await.is_ok() {
                                                            resource.restart();
                                                        }
                                                    }
                                                },
                                                "Reject"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
