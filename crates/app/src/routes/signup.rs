use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::RegisterRequest;
use std::collections::HashMap;

/// Account creation page. A successful signup signs the account in and
/// lands on the dashboard.
#[component]
pub fn Signup() -> Element {
    let mut auth = use_auth();
    let mut display_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().push(Route::Overview {});
    }

    let handle_signup = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let request = RegisterRequest {
            display_name: display_name(),
            email: email(),
            password: password(),
        };
        match server::api::register(request).await {
            Ok(user) => {
                auth.set_user(user);
                navigator().push(Route::Overview {});
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = shared_types::AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(shared_types::AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/auth.css") }

        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Join Courtside" }
                p { class: "subtitle", "Book courts, track your games, become a member" }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_signup,
                    div { class: "form-row",
                        label { r#for: "display_name", "Name" }
                        input {
                            id: "display_name",
                            placeholder: "Your name",
                            value: display_name(),
                            oninput: move |e| display_name.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("display_name") {
                            span { class: "field-error", "{err}" }
                        }
                    }
                    div { class: "form-row",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            oninput: move |e| email.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("email") {
                            span { class: "field-error", "{err}" }
                        }
                    }
                    div { class: "form-row",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "At least 8 characters",
                            value: password(),
                            oninput: move |e| password.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("password") {
                            span { class: "field-error", "{err}" }
                        }
                    }
                    button { class: "primary", r#type: "submit", disabled: loading(),
                        if loading() { "Creating account..." } else { "Create Account" }
                    }
                }

                p { class: "auth-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
