use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Login page with email/password. Redirects straight to the dashboard when
/// a session already exists.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().push(Route::Overview {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
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
                h1 { "Sign In" }
                p { class: "subtitle", "Enter your credentials to access your dashboard" }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_login,
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
                            value: password(),
                            oninput: move |e| password.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("password") {
                            span { class: "field-error", "{err}" }
                        }
                    }
                    button { class: "primary", r#type: "submit", disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                p { class: "auth-footer",
                    "New to the club? "
                    Link { to: Route::Signup {}, "Create an account" }
                }
            }
        }
    }
}
