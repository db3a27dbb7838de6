use crate::components::Loading;
use dioxus::prelude::*;
use shared_types::CouponInput;

/// Coupon administration: create, edit and delete discount codes.
#[component]
pub fn ManageCoupons() -> Element {
    let mut resource = use_server_future(move || async move { server::api::get_coupons().await })?;
    let result = resource.read().as_ref().cloned();

    let mut editing_id = use_signal(|| Option::<i64>::None);
    let mut code = use_signal(String::new);
    let mut percent = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut expires = use_signal(String::new);
    let mut message = use_signal(|| Option::<(bool, String)>::None);

    let mut clear_form = move || {
        editing_id.set(None);
        code.set(String::new());
        percent.set(String::new());
        description.set(String::new());
        expires.set(String::new());
    };

    let handle_save = move |evt: FormEvent| async move {
        evt.prevent_default();
        message.set(None);

        let input = CouponInput {
            code: code(),
            discount_percent: percent().parse().unwrap_or(0),
            description: description(),
            expires_at: chrono::NaiveDate::parse_from_str(&expires(), "%Y-%m-%d").ok(),
        };

        let outcome = match editing_id() {
            Some(id) => server::api::update_coupon(id, input).await.map(|_| ()),
            None => server::api::create_coupon(input).await.map(|_| ()),
        };
        match outcome {
            Ok(()) => {
                message.set(Some((true, "Coupon saved".to_string())));
                clear_form();
                resource.restart();
            }
            Err(e) => message.set(Some((
                false,
                shared_types::AppError::friendly_message(&e.to_string()),
            ))),
        }
    };

    rsx! {
        div { class: "card",
            h3 {
                if editing_id().is_some() { "Edit coupon" } else { "Add a coupon" }
            }
            form { onsubmit: handle_save,
                div { class: "form-row",
                    label { "Code" }
                    input {
                        placeholder: "SMASH10",
                        value: code(),
                        oninput: move |e| code.set(e.value()),
                    }
                }
                div { class: "form-row",
                    label { "Discount %" }
                    input {
                        r#type: "number",
                        min: "1",
                        max: "100",
                        value: percent(),
                        oninput: move |e| percent.set(e.value()),
                    }
                }
                div { class: "form-row",
                    label { "Description" }
                    input {
                        value: description(),
                        oninput: move |e| description.set(e.value()),
                    }
                }
                div { class: "form-row",
                    label { "Expires (optional)" }
                    input {
                        r#type: "date",
                        value: expires(),
                        oninput: move |e| expires.set(e.value()),
                    }
                }
                div { class: "actions",
                    button { class: "primary", r#type: "submit",
                        if editing_id().is_some() { "Save changes" } else { "Create" }
                    }
                    if editing_id().is_some() {
                        button { r#type: "button", onclick: move |_| clear_form(), "Cancel edit" }
                    }
                }
            }
            if let Some((ok, msg)) = message() {
                p { class: if ok { "success-text" } else { "error-text" }, "{msg}" }
            }
        }

        match result {
            None => rsx! { Loading {} },
            Some(Err(e)) => rsx! {
                p { class: "error-text", {shared_types::AppError::friendly_message(&e.to_string())} }
            },
            Some(Ok(coupons)) => rsx! {
                table { class: "data",
                    thead {
                        tr {
                            th { "Code" }
                            th { "Discount" }
                            th { "Description" }
                            th { "Expires" }
                            th { "" }
                        }
                    }
                    tbody {
                        for coupon in coupons {
                            tr { key: "{coupon.id}",
                                td {
                                    span { class: "badge accent", "{coupon.code}" }
                                }
                                td { "{coupon.discount_percent}%" }
                                td { "{coupon.description}" }
                                td {
                                    if let Some(until) = coupon.expires_at {
                                        "{until}"
                                    } else {
                                        span { class: "muted", "never" }
                                    }
                                }
                                td {
                                    div { class: "actions",
                                        button {
                                            onclick: {
                                                let coupon = coupon.clone();
                                                move |_| {
                                                    editing_id.set(Some(coupon.id));
                                                    code.set(coupon.code.clone());
                                                    percent.set(coupon.discount_percent.to_string());
                                                    description.set(coupon.description.clone());
                                                    expires.set(
                                                        coupon
                                                            .expires_at
                                                            .map(|d| d.to_string())
                                                            .unwrap_or_default(),
                                                    );
                                                }
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "danger",
                                            onclick: {
                                                let id = coupon.id;
                                                move |_| async move {
                                                    if server::api::delete_coupon(id).await.is_ok() {
                                                        resource.restart();
                                                    }
                                                }
                                            },
                                            "Delete"
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
