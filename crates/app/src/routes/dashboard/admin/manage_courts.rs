use crate::components::Loading;
use dioxus::prelude::*;
use shared_types::CourtInput;

/// Court catalog administration: create, edit and delete courts. Slots are
/// entered comma-separated.
#[component]
pub fn ManageCourts() -> Element {
    let mut resource = use_server_future(move || async move { server::api::get_courts().await })?;
    let result = resource.read().as_ref().cloned();

    let mut editing_id = use_signal(|| Option::<i64>::None);
    let mut name = use_signal(String::new);
    let mut court_type = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut slots = use_signal(String::new);
    let mut message = use_signal(|| Option::<(bool, String)>::None);

    let mut clear_form = move || {
        editing_id.set(None);
        name.set(String::new());
        court_type.set(String::new());
        price.set(String::new());
        slots.set(String::new());
    };

    let handle_save = move |evt: FormEvent| async move {
        evt.prevent_default();
        message.set(None);

        let input = CourtInput {
            name: name(),
            court_type: court_type(),
            price_per_slot: price().parse().unwrap_or(-1.0),
            image_url: None,
            slots: slots()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        };

        let outcome = match editing_id() {
            Some(id) => server::api::update_court(id, input).await.map(|_| ()),
            None => server::api::create_court(input).await.map(|_| ()),
        };
        match outcome {
            Ok(()) => {
                message.set(Some((true, "Court saved".to_string())));
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
                if editing_id().is_some() { "Edit court" } else { "Add a court" }
            }
            form { onsubmit: handle_save,
                div { class: "form-row",
                    label { "Name" }
                    input {
                        value: name(),
                        oninput: move |e| name.set(e.value()),
                    }
                }
                div { class: "form-row",
                    label { "Type" }
                    input {
                        placeholder: "tennis, badminton, squash...",
                        value: court_type(),
                        oninput: move |e| court_type.set(e.value()),
                    }
                }
                div { class: "form-row",
                    label { "Price per slot" }
                    input {
                        r#type: "number",
                        step: "0.5",
                        value: price(),
                        oninput: move |e| price.set(e.value()),
                    }
                }
                div { class: "form-row",
                    label { "Slots (comma separated)" }
                    input {
                        placeholder: "06:00 - 07:00, 07:00 - 08:00",
                        value: slots(),
                        oninput: move |e| slots.set(e.value()),
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
            Some(Ok(courts)) => rsx! {
                table { class: "data",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Type" }
                            th { "Price" }
                            th { "Slots" }
                            th { "" }
                        }
                    }
                    tbody {
                        for court in courts {
                            tr { key: "{court.id}",
                                td { "{court.name}" }
                                td { "{court.court_type}" }
                                td { "${court.price_per_slot}" }
                                td { "{court.slots.len()}" }
                                td {
                                    div { class: "actions",
                                        button {
                                            onclick: {
                                                let court = court.clone();
                                                move |_| {
                                                    editing_id.set(Some(court.id));
                                                    name.set(court.name.clone());
                                                    court_type.set(court.court_type.clone());
                                                    price.set(court.price_per_slot.to_string());
                                                    slots.set(court.slots.join(", "));
                                                }
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "danger",
                                            onclick: {
                                                let id = court.id;
                                                move |_| async move {
                                                    if server::api::delete_court(id).await.is_ok() {
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
