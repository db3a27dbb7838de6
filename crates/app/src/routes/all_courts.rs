use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{Court, CreateBookingRequest};

/// Public court catalog. Signed-in visitors can request a booking inline;
/// everyone else gets a sign-in prompt.
#[component]
pub fn AllCourts() -> Element {
    let courts = use_server_future(move || async move { server::api::get_courts().await })?;
    let courts = courts
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().ok().cloned())
        .unwrap_or_default();

    rsx! {
        h1 { "Courts" }
        if courts.is_empty() {
            p { class: "muted", "No courts are listed right now. Check back soon." }
        }
        div { class: "card-grid",
            for court in courts {
                CourtCard { court: court.clone(), key: "{court.id}" }
            }
        }
    }
}

#[component]
fn CourtCard(court: Court) -> Element {
    let auth = use_auth();
    let mut date = use_signal(String::new);
    let initial_slot = court.slots.first().cloned().unwrap_or_default();
    let mut slot = use_signal(move || initial_slot);
    let mut message = use_signal(|| Option::<(bool, String)>::None);

    let court_id = court.id;
    let request_booking = move |_| async move {
        message.set(None);
        let Ok(parsed) = chrono::NaiveDate::parse_from_str(&date(), "%Y-%m-%d") else {
            message.set(Some((false, "Pick a date first".to_string())));
            return;
        };
        let request = CreateBookingRequest {
            court_id,
            date: parsed,
            slots: vec![slot()],
        };
        match server::api::create_booking(request).await {
            Ok(_) => message.set(Some((
                true,
                "Booking requested — awaiting approval".to_string(),
            ))),
            Err(e) => message.set(Some((
                false,
                shared_types::AppError::friendly_message(&e.to_string()),
            ))),
        }
    };

    rsx! {
        div { class: "card",
            h3 { "{court.name}" }
            span { class: "badge", "{court.court_type}" }
            p { class: "muted", "${court.price_per_slot} per slot" }

            if auth.is_authenticated() {
                div { class: "form-row",
                    label { "Date" }
                    input {
                        r#type: "date",
                        value: date(),
                        oninput: move |e| date.set(e.value()),
                    }
                }
                div { class: "form-row",
                    label { "Slot" }
                    select {
                        onchange: move |e| slot.set(e.value()),
                        for s in court.slots.iter() {
                            option { value: "{s}", selected: *s == slot(), "{s}" }
                        }
                    }
                }
                button { class: "primary", onclick: request_booking, "Request Booking" }
                if let Some((ok, msg)) = message() {
                    p { class: if ok { "success-text" } else { "error-text" }, "{msg}" }
                }
            } else {
                p { class: "muted",
                    Link { to: Route::Login {}, "Sign in" }
                    " to request a booking."
                }
            }
        }
    }
}
