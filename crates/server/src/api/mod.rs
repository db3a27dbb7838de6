pub mod account;
pub mod admin;
pub mod announcement;
pub mod booking;
pub mod coupon;
pub mod court;
pub mod payment;

pub use account::*;
pub use admin::*;
pub use announcement::*;
pub use booking::*;
pub use coupon::*;
pub use court::*;
pub use payment::*;

#[cfg(feature = "server")]
use dioxus::prelude::ServerFnError;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

// ── Auth helpers for server functions ──────────────────

/// Extract and validate the caller's identity from the current request.
/// Checks middleware-injected Claims first, falls back to cookie parsing.
#[cfg(feature = "server")]
pub(crate) fn require_auth() -> Result<crate::auth::tokens::Claims, ServerFnError> {
    use crate::auth::{cookies, tokens};
    use shared_types::AppError;

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let parts = ctx.parts_mut();

    // Primary: Claims already validated by auth middleware
    if let Some(claims) = parts.extensions.get::<tokens::Claims>() {
        return Ok(claims.clone());
    }

    // Fallback: parse access token from cookies/Bearer header
    let headers = parts.headers.clone();
    let token = cookies::extract_access_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    tokens::validate_access_token(&token)
        .map_err(|_| AppError::unauthorized("Invalid or expired token").into_server_fn_error())
}

/// Require an authenticated caller and load their account record.
#[cfg(feature = "server")]
pub(crate) fn require_account() -> Result<crate::store::UserRecord, ServerFnError> {
    use shared_types::AppError;

    let claims = require_auth()?;
    crate::store::store()
        .user(claims.sub)
        .ok_or_else(|| AppError::unauthorized("Account no longer exists").into_server_fn_error())
}

/// Require the caller to hold the admin role.
#[cfg(feature = "server")]
pub(crate) fn require_admin() -> Result<crate::store::UserRecord, ServerFnError> {
    use shared_types::{AppError, Role};

    let account = require_account()?;
    if account.role != Role::Admin {
        return Err(AppError::forbidden("Admin role required").into_server_fn_error());
    }
    Ok(account)
}

/// Require the caller to hold the member role.
#[cfg(feature = "server")]
pub(crate) fn require_member() -> Result<crate::store::UserRecord, ServerFnError> {
    use shared_types::{AppError, Role};

    let account = require_account()?;
    if account.role != Role::Member {
        return Err(AppError::forbidden("Member role required").into_server_fn_error());
    }
    Ok(account)
}

/// Issue a fresh token pair for `user` and schedule the auth cookies.
#[cfg(feature = "server")]
pub(crate) fn issue_session(user: &crate::store::UserRecord) -> Result<(), ServerFnError> {
    use crate::auth::{cookies, tokens};
    use shared_types::AppError;

    let access_token = tokens::create_access_token(user.id, &user.email)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    let (refresh_token, expires_at) = tokens::create_refresh_token(user.id, &user.email)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    // Keep only the hash of the refresh token server-side
    crate::store::store().store_refresh_token(
        tokens::hash_token(&refresh_token),
        user.id,
        expires_at,
    );

    cookies::schedule_auth_cookies(&access_token, &refresh_token);
    Ok(())
}
