use crate::components::Loading;
use dioxus::prelude::*;
use shared_types::AnnouncementInput;

/// Publish club announcements and review what is already posted.
#[component]
pub fn MakeAnnouncement() -> Element {
    let mut resource =
        use_server_future(move || async move { server::api::get_announcements().await })?;
    let result = resource.read().as_ref().cloned();

    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut message = use_signal(|| Option::<(bool, String)>::None);

    let handle_publish = move |evt: FormEvent| async move {
        evt.prevent_default();
        message.set(None);

        let input = AnnouncementInput {
            title: title(),
            body: body(),
        };
        match server::api::make_announcement(input).await {
            Ok(_) => {
                message.set(Some((true, "Announcement published".to_string())));
                title.set(String::new());
                body.set(String::new());
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
            h3 { "New announcement" }
            form { onsubmit: handle_publish,
                div { class: "form-row",
                    label { "Title" }
                    input {
                        value: title(),
                        oninput: move |e| title.set(e.value()),
                    }
                }
                div { class: "form-row",
                    label { "Body" }
                    textarea {
                        rows: 4,
                        value: body(),
                        oninput: move |e| body.set(e.value()),
                    }
                }
                button { class: "primary", r#type: "submit", "Publish" }
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
            Some(Ok(announcements)) => rsx! {
                for item in announcements {
                    div { class: "card", key: "{item.id}",
                        h3 { "{item.title}" }
                        p { "{item.body}" }
                        p { class: "muted", {item.created_at.format("%b %e, %Y").to_string()} }
                    }
                }
            },
        }
    }
}
