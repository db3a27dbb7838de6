use dioxus::prelude::*;
use shared_types::{AccountSummary, ClubStats};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use crate::store::store;

/// Court/user/member counts for the admin overview.
#[server]
pub async fn get_club_stats() -> Result<ClubStats, ServerFnError> {
    super::require_admin()?;
    Ok(store().stats())
}

/// Every registered account.
#[server]
pub async fn get_all_accounts() -> Result<Vec<AccountSummary>, ServerFnError> {
    super::require_admin()?;
    Ok(store().list_accounts())
}

/// Accounts currently holding the member role.
#[server]
pub async fn get_members() -> Result<Vec<AccountSummary>, ServerFnError> {
    super::require_admin()?;
    Ok(store().list_members())
}

/// Remove an account together with its bookings and sessions.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_account(id: i64) -> Result<(), ServerFnError> {
    use shared_types::AppError;

    let admin = super::require_admin()?;
    if admin.id == id {
        return Err(AppError::bad_request("You cannot delete your own account")
            .into_server_fn_error());
    }
    store()
        .delete_account(id)
        .map_err(|e| e.into_server_fn_error())
}

/// Demote a member back to the user role.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn demote_member(id: i64) -> Result<(), ServerFnError> {
    use shared_types::{AppError, Role};

    super::require_admin()?;
    match store().role_of(id) {
        Some(Role::Member) => store()
            .set_role(id, Role::User)
            .map_err(|e| e.into_server_fn_error()),
        Some(_) => Err(AppError::bad_request("Account is not a member").into_server_fn_error()),
        None => Err(AppError::not_found("Account not found").into_server_fn_error()),
    }
}
