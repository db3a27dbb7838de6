use crate::components::Loading;
use crate::routes::dashboard::BookingTable;
use dioxus::prelude::*;

/// Paid, confirmed bookings.
#[component]
pub fn ConfirmedBookings() -> Element {
    let resource =
        use_server_future(move || async move { server::api::get_my_confirmed_bookings().await })?;
    let result = resource.read().as_ref().cloned();

    rsx! {
        match result {
            None => rsx! { Loading {} },
            Some(Err(e)) => rsx! {
                p { class: "error-text", {shared_types::AppError::friendly_message(&e.to_string())} }
            },
            Some(Ok(bookings)) => rsx! {
                BookingTable { bookings, show_email: false }
            },
        }
    }
}
