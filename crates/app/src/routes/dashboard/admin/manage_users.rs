use crate::components::Loading;
use dioxus::prelude::*;

/// Every account in the club, with the role each one currently holds.
#[component]
pub fn ManageUsers() -> Element {
    let mut resource =
        use_server_future(move || async move { server::api::get_all_accounts().await })?;
    let result = resource.read().as_ref().cloned();

    rsx! {
        match result {
            None => rsx! { Loading {} },
            Some(Err(e)) => rsx! {
                p { class: "error-text", {shared_types::AppError::friendly_message(&e.to_string())} }
            },
            Some(Ok(accounts)) => rsx! {
                table { class: "data",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Joined" }
                            th { "" }
                        }
                    }
                    tbody {
                        for account in accounts {
                            tr { key: "{account.id}",
                                td { "{account.display_name}" }
                                td { "{account.email}" }
                                td {
                                    span { class: "badge", "{account.role}" }
                                }
                                td { {account.registered_at.format("%b %e, %Y").to_string()} }
                                td {
                                    if account.role != "admin" {
                                        button {
                                            class: "danger",
                                            onclick: {
                                                let id = account.id;
                                                move |_| async move {
                                                    if server::api::delete_account(id).await.is_ok() {
                                                        resource.restart();
                                                    }
                                                }
                                            },
                                            "Remove"
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
