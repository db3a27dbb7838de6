use crate::components::Loading;
use dioxus::prelude::*;
use shared_types::{Coupon, PayBookingRequest};

/// Payment page: pick an approved booking, optionally apply a coupon, pay.
/// The club records the payment and confirms the slot — no card details.
#[component]
pub fn Payment() -> Element {
    let mut resource =
        use_server_future(move || async move { server::api::get_my_approved_bookings().await })?;
    let result = resource.read().as_ref().cloned();

    let mut coupon_code = use_signal(String::new);
    let mut coupon = use_signal(|| Option::<Coupon>::None);
    let mut coupon_msg = use_signal(|| Option::<(bool, String)>::None);
    let mut payment_msg = use_signal(|| Option::<(bool, String)>::None);

    let apply_coupon = move |_| async move {
        coupon_msg.set(None);
        let code = coupon_code();
        if code.trim().is_empty() {
            coupon.set(None);
            return;
        }
        match server::api::validate_coupon(code).await {
            Ok(found) => {
                coupon_msg.set(Some((true, format!("{}% off applied", found.discount_percent))));
                coupon.set(Some(found));
            }
            Err(e) => {
                coupon.set(None);
                coupon_msg.set(Some((
                    false,
                    shared_types::AppError::friendly_message(&e.to_string()),
                )));
            }
        }
    };

    // Build the booking list outside rsx so the per-row discount can be
    // computed next to the pay handler.
    let list = match result {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! {
            p { class: "error-text", {shared_types::AppError::friendly_message(&e.to_string())} }
        },
        Some(Ok(bookings)) => {
            if bookings.is_empty() {
                rsx! {
                    p { class: "muted", "Nothing to pay — no approved bookings." }
                }
            } else {
                let rows = bookings.into_iter().map(|booking| {
                    let due = match coupon() {
                        Some(c) => c.apply(booking.price),
                        None => booking.price,
                    };
                    let id = booking.id;
                    rsx! {
                        tr { key: "{id}",
                            td { "{booking.court_name}" }
                            td { "{booking.date}" }
                            td { "{booking.slots.join(\", \")}" }
                            td { "${due}" }
                            td {
                                button {
                                    class: "primary",
                                    onclick: move |_| async move {
                                        payment_msg.set(None);
                                        let request = PayBookingRequest {
                                            booking_id: id,
                                            coupon_code: coupon().map(|c| c.code),
                                        };
                                        match server::api::pay_booking(request).await {
                                            Ok(paid) => {
                                                payment_msg.set(Some((
                                                    true,
                                                    format!("Paid ${} — booking confirmed", paid.amount),
                                                )));
                                                resource.restart();
                                            }
                                            Err(e) => payment_msg.set(Some((
                                                false,
                                                shared_types::AppError::friendly_message(&e.to_string()),
                                            ))),
                                        }
                                    },
                                    "Pay"
                                }
                            }
                        }
                    }
                });
                rsx! {
                    table { class: "data",
                        thead {
                            tr {
                                th { "Court" }
                                th { "Date" }
                                th { "Slots" }
                                th { "Total" }
                                th { "" }
                            }
                        }
                        tbody { {rows} }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "card",
            h3 { "Coupon" }
            div { class: "form-row",
                label { "Code" }
                input {
                    placeholder: "e.g. SMASH10",
                    value: coupon_code(),
                    oninput: move |e| coupon_code.set(e.value()),
                }
            }
            button { onclick: apply_coupon, "Apply" }
            if let Some((ok, msg)) = coupon_msg() {
                p { class: if ok { "success-text" } else { "error-text" }, "{msg}" }
            }
        }

        if let Some((ok, msg)) = payment_msg() {
            p { class: if ok { "success-text" } else { "error-text" }, "{msg}" }
        }

        {list}
    }
}
