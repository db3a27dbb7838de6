use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        h1 { "Contact" }
        div { class: "card-grid",
            div { class: "card",
                h3 { "Front desk" }
                p { class: "muted", "Mon–Sun, 06:00 – 22:00" }
                p { "+1 (555) 010-4488" }
            }
            div { class: "card",
                h3 { "Email" }
                p { "hello@courtside.club" }
            }
            div { class: "card",
                h3 { "Visit" }
                p { "12 Baseline Road" }
                p { class: "muted", "Parking behind the badminton hall." }
            }
        }
    }
}
