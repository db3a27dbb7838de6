use dioxus::prelude::*;

#[component]
pub fn Support() -> Element {
    rsx! {
        h1 { "Support" }
        div { class: "card",
            h3 { "How do bookings work?" }
            p { class: "muted",
                "Request any open slot from the courts page. An admin reviews the "
                "request; once approved you pay from your dashboard and the slot "
                "is confirmed."
            }
        }
        div { class: "card",
            h3 { "How do I become a member?" }
            p { class: "muted",
                "Your first approved booking makes you a member automatically. "
                "Members see approved and confirmed bookings and payment history."
            }
        }
        div { class: "card",
            h3 { "I can't sign in" }
            p { class: "muted",
                "Sessions expire after inactivity. Sign in again; if the problem "
                "persists, email hello@courtside.club from your account address."
            }
        }
    }
}
