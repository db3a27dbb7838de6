use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        h1 { "About the club" }
        p {
            "Courtside has run racket sports in the neighbourhood since 1987. "
            "Four tennis courts, a badminton hall and two squash boxes, open to "
            "everyone — members get priority slots and seasonal rates."
        }
        p { class: "muted",
            "Memberships are earned, not bought: request a booking, play your "
            "first approved session, and you're in."
        }
    }
}
