use crate::components::Loading;
use dioxus::prelude::*;

/// Club announcements, visible to every authenticated role.
#[component]
pub fn Announcements() -> Element {
    let resource =
        use_server_future(move || async move { server::api::get_announcements().await })?;
    let result = resource.read().as_ref().cloned();

    rsx! {
        match result {
            None => rsx! { Loading {} },
            Some(Err(e)) => rsx! {
                p { class: "error-text", {shared_types::AppError::friendly_message(&e.to_string())} }
            },
            Some(Ok(announcements)) => rsx! {
                if announcements.is_empty() {
                    p { class: "muted", "No announcements yet." }
                }
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
