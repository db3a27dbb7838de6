use crate::routes::Route;
use dioxus::prelude::*;

/// Landing page: hero, active discount codes, a taste of the catalog.
#[component]
pub fn Home() -> Element {
    let coupons = use_server_future(move || async move { server::api::get_coupons().await })?;
    let coupons = coupons
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().ok().cloned())
        .unwrap_or_default();

    rsx! {
        section { class: "hero",
            h1 { "Your court is waiting." }
            p {
                "Tennis, badminton and squash courts across the club — book a slot, "
                "get approved, and play. Members keep their favourite times."
            }
            div { class: "actions",
                Link { to: Route::AllCourts {}, class: "nav-cta", "Browse Courts" }
                Link { to: Route::Signup {}, "Join the club" }
            }
        }

        if !coupons.is_empty() {
            section {
                h2 { "Current offers" }
                div { class: "card-grid",
                    for coupon in coupons {
                        div { class: "card", key: "{coupon.id}",
                            span { class: "badge accent", "{coupon.code}" }
                            p { "{coupon.description}" }
                            p { class: "muted", "{coupon.discount_percent}% off at checkout" }
                        }
                    }
                }
            }
        }
    }
}
