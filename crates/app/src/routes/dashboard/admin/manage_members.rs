use crate::components::Loading;
use dioxus::prelude::*;

/// Member administration: demote back to user or remove the account.
#[component]
pub fn ManageMembers() -> Element {
    let mut resource = use_server_future(move || async move { server::api::get_members().await })?;
    let result = resource.read().as_ref().cloned();

    rsx! {
        match result {
            None => rsx! { Loading {} },
            Some(Err(e)) => rsx! {
                p { class: "error-text", {shared_types::AppError::friendly_message(&e.to_string())} }
            },
            Some(Ok(members)) => rsx! {
                if members.is_empty() {
                    p { class: "muted", "No members yet — approve a booking to create one." }
                } else {
                    table { class: "data",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Joined" }
                                th { "" }
                            }
                        }
                        tbody {
                            for member in members {
                                tr { key: "{member.id}",
                                    td { "{member.display_name}" }
                                    td { "{member.email}" }
                                    td { {member.registered_at.format("%b %e, %Y").to_string()} }
                                    td {
                                        div { class: "actions",
                                            button {
                                                onclick: {
                                                    let id = member.id;
                                                    move |_| async move {
                                                        if server::api::demote_member(id).await.is_ok() {
                                                            resource.restart();
                                                        }
                                                    }
                                                },
                                                "Demote"
                                            }
                                            button {
                                                class: "danger",
                                                onclick: {
                                                    let id = member.id;
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
                }
            },
        }
    }
}
