use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

pub const ACCESS_COOKIE: &str = "courtside_access";
pub const REFRESH_COOKIE: &str = "courtside_refresh";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn build_auth_cookie(name: &'static str, token: &str, max_age_seconds: i64) -> HeaderValue {
    let cookie = Cookie::build((name, token))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_seconds))
        .secure(cookie_secure())
        .build();

    HeaderValue::from_str(&cookie.to_string()).expect("cookie header value should be valid")
}

/// Build a Set-Cookie header value for the access token.
pub fn build_access_cookie(token: &str, max_age_minutes: i64) -> HeaderValue {
    build_auth_cookie(ACCESS_COOKIE, token, max_age_minutes * 60)
}

/// Build a Set-Cookie header value for the refresh token.
pub fn build_refresh_cookie(token: &str, max_age_days: i64) -> HeaderValue {
    build_auth_cookie(REFRESH_COOKIE, token, max_age_days * 86400)
}

/// Build Set-Cookie headers that clear both auth cookies.
pub fn build_clear_cookies() -> (HeaderValue, HeaderValue) {
    (
        build_auth_cookie(ACCESS_COOKIE, "", 0),
        build_auth_cookie(REFRESH_COOKIE, "", 0),
    )
}

/// Extract the access token from cookies (preferred) or Bearer header.
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, ACCESS_COOKIE) {
        return Some(token);
    }

    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    None
}

/// Extract the refresh token from cookies.
pub fn extract_refresh_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, REFRESH_COOKIE)
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;
    for part in cookie_header.split(';') {
        if let Ok(cookie) = Cookie::parse(part.trim()) {
            if cookie.name() == name && !cookie.value().is_empty() {
                return Some(cookie.value().to_string());
            }
        }
    }
    None
}

/// Set both access and refresh cookies on the response using the
/// configured lifetimes.
pub fn set_auth_cookies(headers: &mut HeaderMap, access_token: &str, refresh_token: &str) {
    let session = crate::config::config().session;
    headers.append(
        header::SET_COOKIE,
        build_access_cookie(access_token, session.access_token_minutes),
    );
    headers.append(
        header::SET_COOKIE,
        build_refresh_cookie(refresh_token, session.refresh_token_days),
    );
}

/// Clear both auth cookies on the response.
pub fn clear_auth_cookies(headers: &mut HeaderMap) {
    let (access, refresh) = build_clear_cookies();
    headers.append(header::SET_COOKIE, access);
    headers.append(header::SET_COOKIE, refresh);
}

/// Pending cookie action to be picked up by the auth middleware.
#[derive(Clone, Debug)]
pub enum PendingCookieAction {
    Set {
        access_token: String,
        refresh_token: String,
    },
    Clear,
}

/// Shared slot letting server functions communicate cookie actions to the
/// middleware, which owns the response headers.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    fn schedule(&self, action: PendingCookieAction) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(action);
        }
    }
}

fn with_slot(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.schedule(action);
        }
    }
}

/// Schedule auth cookies to be set by the middleware.
pub fn schedule_auth_cookies(access_token: &str, refresh_token: &str) {
    with_slot(PendingCookieAction::Set {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
    });
}

/// Schedule auth cookies to be cleared by the middleware.
pub fn schedule_clear_cookies() {
    with_slot(PendingCookieAction::Clear);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_named_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("other=1; courtside_access=tok123; theme=dark"),
        );
        assert_eq!(extract_access_token(&headers), Some("tok123".to_string()));
    }

    #[test]
    fn falls_back_to_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer tok456"),
        );
        assert_eq!(extract_access_token(&headers), Some("tok456".to_string()));
    }

    #[test]
    fn empty_cookie_value_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("courtside_access="),
        );
        assert_eq!(extract_access_token(&headers), None);
    }
}
