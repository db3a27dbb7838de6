use crate::components::Loading;
use dioxus::prelude::*;

/// The caller's bookings still waiting on admin approval, with the option
/// to withdraw them.
#[component]
pub fn PendingBookings() -> Element {
    let mut resource =
        use_server_future(move || async move { server::api::get_my_pending_bookings().await })?;
    let result = resource.read().as_ref().cloned();

    rsx! {
        match result {
            None => rsx! { Loading {} },
            Some(Err(e)) => rsx! {
                p { class: "error-text", {shared_types::AppError::friendly_message(&e.to_string())} }
            },
            Some(Ok(bookings)) => rsx! {
                if bookings.is_empty() {
                    p { class: "muted", "No pending bookings. Request one from the courts page." }
                } else {
                    table { class: "data",
                        thead {
                            tr {
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
                                    td { "{booking.court_name}" }
                                    td { "{booking.date}" }
                                    td { "{booking.slots.join(\", \")}" }
                                    td { "${booking.price}" }
                                    td {
                                        button {
                                            class: "danger",
                                            onclick: {
                                                let id = booking.id;
                                                move |_| async move {
                                                    if server::api::cancel_booking(id).await.is_ok() {
                                                        resource.restart();
                                                    }
                                                }
                                            },
                                            "Cancel"
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
