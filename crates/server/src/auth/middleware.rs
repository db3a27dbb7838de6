use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::tokens::{self, hash_token, validate_access_token, validate_refresh_token};
use crate::store::store;

/// Permissive auth middleware handling authentication and cookie management.
///
/// On each request:
/// 1. Validates the access token from cookies (or Bearer header fallback)
/// 2. If expired, attempts transparent refresh using the refresh cookie
/// 3. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 4. After the handler runs, applies any pending cookie actions to the response
///
/// Does NOT reject unauthenticated requests — downstream handlers decide
/// authorization.
pub async fn auth_middleware(mut req: Request, next: Next) -> Response {
    let headers = req.headers().clone();
    let mut refresh_cookies: Option<(String, String)> = None;

    let access_token = cookies::extract_access_token(&headers);
    let mut needs_refresh = access_token.is_none();

    if let Some(token) = access_token {
        match validate_access_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(_) => {
                needs_refresh = true;
            }
        }
    }

    // Transparent refresh: access token missing (cookie expired) or invalid
    if needs_refresh {
        if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
            if let Some((new_access, new_refresh)) =
                try_transparent_refresh(&refresh_token, &mut req)
            {
                refresh_cookies = Some((new_access, new_refresh));
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    // Apply cookies from transparent refresh
    if let Some((access, refresh)) = refresh_cookies {
        cookies::set_auth_cookies(response.headers_mut(), &access, &refresh);
    }

    // Apply any cookie action scheduled by server functions
    let pending = cookie_slot.0.lock().ok().and_then(|mut slot| slot.take());
    if let Some(action) = pending {
        match action {
            PendingCookieAction::Set {
                access_token,
                refresh_token,
            } => {
                cookies::set_auth_cookies(response.headers_mut(), &access_token, &refresh_token);
            }
            PendingCookieAction::Clear => {
                cookies::clear_auth_cookies(response.headers_mut());
            }
        }
    }

    response
}

/// Validate the refresh token against the store, rotate it, and insert the
/// refreshed Claims into the request extensions. Returns the new token pair
/// on success.
fn try_transparent_refresh(refresh_token: &str, req: &mut Request) -> Option<(String, String)> {
    let claims = validate_refresh_token(refresh_token).ok()?;
    let record = store().valid_refresh_token(&hash_token(refresh_token))?;
    if record.user_id != claims.sub {
        return None;
    }
    let user = store().user(claims.sub)?;

    let new_access = tokens::create_access_token(user.id, &user.email).ok()?;
    let (new_refresh, expires_at) = tokens::create_refresh_token(user.id, &user.email).ok()?;

    // Rotate: revoke the old family and remember only the new hash
    store().revoke_refresh_tokens(user.id);
    store().store_refresh_token(tokens::hash_token(&new_refresh), user.id, expires_at);

    if let Ok(new_claims) = validate_access_token(&new_access) {
        req.extensions_mut().insert(new_claims);
    }
    tracing::debug!(user_id = user.id, "transparently refreshed session");

    Some((new_access, new_refresh))
}
