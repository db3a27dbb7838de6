use crate::components::Loading;
use crate::routes::Route;
use dioxus::prelude::*;

/// Approved, still unpaid bookings. Paying happens on the payment page;
/// unpaid bookings can still be withdrawn here.
#[component]
pub fn ApprovedBookings() -> Element {
    let mut resource =
        use_server_future(move || async move { server::api::get_my_approved_bookings().await })?;
    let result = resource.read().as_ref().cloned();

    rsx! {
        match result {
            None => rsx! { Loading {} },
            Some(Err(e)) => rsx! {
                p { class: "error-text", {shared_types::AppError::friendly_message(&e.to_string())} }
            },
            Some(Ok(bookings)) => rsx! {
                if bookings.is_empty() {
                    p { class: "muted", "No approved bookings waiting for payment." }
                } else {
                    p { class: "muted",
                        "These slots are reserved for you. "
                        Link { to: Route::Payment {}, "Pay" }
                        " to confirm them."
                    }
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
