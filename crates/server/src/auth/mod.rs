pub mod cookies;
pub mod middleware;
pub mod password;
pub mod tokens;

/// Check if the given email matches the `ADMIN_EMAIL` env var
/// (case-insensitive). Returns `false` if the env var is empty or unset.
/// Used to bootstrap the first admin account at registration time.
pub fn is_admin_email(email: &str) -> bool {
    match std::env::var("ADMIN_EMAIL") {
        Ok(admin) if !admin.is_empty() => admin.eq_ignore_ascii_case(email),
        _ => false,
    }
}
