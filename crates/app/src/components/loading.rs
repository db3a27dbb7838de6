use dioxus::prelude::*;

/// Neutral loading placeholder shown while a gate decision is pending.
/// Deliberately role-free so nothing unauthorized flashes during
/// resolution.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading-wrap",
            div { class: "loading-spinner" }
            p { class: "loading-text", "Loading..." }
        }
    }
}
