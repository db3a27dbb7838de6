use dioxus::prelude::*;
use shared_types::{AuthUser, RegisterRequest};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::store::store;

/// Create an account and sign it in. Everyone starts as `user`; the email
/// named by `ADMIN_EMAIL` is bootstrapped straight to admin.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn register(request: RegisterRequest) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{is_admin_email, password};
    use shared_types::{AppError, Role};

    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let password_hash = password::hash_password(&request.password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let role = if is_admin_email(&request.email) {
        Role::Admin
    } else {
        Role::User
    };

    let user = store()
        .register(&request, password_hash, role)
        .map_err(|e| e.into_server_fn_error())?;

    super::issue_session(&user)?;
    tracing::info!(user_id = user.id, "account registered");
    Ok(user.auth_user())
}

/// Login with email and password. Sets HTTP-only auth cookies on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::password as pw;
    use shared_types::{AppError, LoginRequest};

    let req = LoginRequest {
        email: email.clone(),
        password: password.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let user = store()
        .user_by_email(&email)
        .ok_or_else(|| AppError::unauthorized("Invalid email or password").into_server_fn_error())?;

    let valid = pw::verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    if !valid {
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    super::issue_session(&user)?;
    Ok(user.auth_user())
}

/// Logout by revoking the caller's refresh tokens and clearing auth cookies.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::cookies;

    if let Ok(claims) = super::require_auth() {
        store().revoke_refresh_tokens(claims.sub);
    }
    cookies::schedule_clear_cookies();
    Ok(())
}

/// Get the current authenticated user. Returns `None` if not authenticated.
///
/// Checks request extensions for Claims first (the auth middleware already
/// validated the token and handled transparent refresh), then falls back to
/// parsing cookies directly.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::auth::{cookies, tokens};

    let ctx = match dioxus::fullstack::FullstackContext::current() {
        Some(c) => c,
        None => return Ok(None),
    };

    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<tokens::Claims>() {
        return Ok(store().user(claims.sub).map(|u| u.auth_user()));
    }

    let headers = parts.headers.clone();

    if let Some(token) = cookies::extract_access_token(&headers) {
        if let Ok(claims) = tokens::validate_access_token(&token) {
            return Ok(store().user(claims.sub).map(|u| u.auth_user()));
        }
        tracing::debug!("access token present but invalid or expired");
    }

    if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
        if let Ok(claims) = tokens::validate_refresh_token(&refresh_token) {
            let hash = tokens::hash_token(&refresh_token);
            if let Some(record) = store().valid_refresh_token(&hash) {
                if record.user_id == claims.sub {
                    return Ok(store().user(claims.sub).map(|u| u.auth_user()));
                }
            }
        }
    }

    Ok(None)
}

/// Resolve the caller's current role as its wire string.
///
/// The client resolves this separately from the session so that role
/// changes (member promotion, demotion) take effect on the next resolution
/// without re-issuing tokens.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_my_role() -> Result<String, ServerFnError> {
    use shared_types::AppError;

    let claims = super::require_auth()?;
    store()
        .role_of(claims.sub)
        .map(|role| role.as_str().to_string())
        .ok_or_else(|| AppError::unauthorized("Account no longer exists").into_server_fn_error())
}
