use crate::components::Loading;
use dioxus::prelude::*;

/// Past payments, newest first.
#[component]
pub fn PaymentHistory() -> Element {
    let resource =
        use_server_future(move || async move { server::api::get_payment_history().await })?;
    let result = resource.read().as_ref().cloned();

    rsx! {
        match result {
            None => rsx! { Loading {} },
            Some(Err(e)) => rsx! {
                p { class: "error-text", {shared_types::AppError::friendly_message(&e.to_string())} }
            },
            Some(Ok(payments)) => rsx! {
                if payments.is_empty() {
                    p { class: "muted", "No payments yet." }
                } else {
                    table { class: "data",
                        thead {
                            tr {
                                th { "Court" }
                                th { "Date" }
                                th { "Slots" }
                                th { "Amount" }
                                th { "Coupon" }
                                th { "Paid" }
                            }
                        }
                        tbody {
                            for payment in payments {
                                tr { key: "{payment.id}",
                                    td { "{payment.court_name}" }
                                    td { "{payment.date}" }
                                    td { "{payment.slots.join(\", \")}" }
                                    td { "${payment.amount}" }
                                    td {
                                        if let Some(code) = payment.coupon_code.as_ref() {
                                            span { class: "badge accent", "{code}" }
                                        } else {
                                            span { class: "muted", "—" }
                                        }
                                    }
                                    td { {payment.paid_at.format("%b %e, %Y").to_string()} }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
