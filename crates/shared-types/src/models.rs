use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authorization class of an authenticated account.
///
/// - `User` — signed up, can request bookings and read announcements.
/// - `Member` — has at least one admin-approved booking; can pay for
///   approved slots and see confirmed bookings.
/// - `Admin` — manages courts, bookings, members, users, coupons and
///   announcements.
///
/// There is deliberately no `Default` impl: an account always has exactly
/// one concrete role, and an unrecognized wire value must surface as a
/// resolution failure rather than silently becoming some fallback role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Member,
    Admin,
}

impl Role {
    /// Parse the wire representation. Returns `None` for anything outside
    /// the closed {user, member, admin} set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(Role::User),
            "member" => Some(Role::Member),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Lowercase string for storage and transport.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }
}

/// Authenticated account identity returned by the session endpoint.
///
/// Carries display metadata only. The authorization role is resolved
/// separately (see `access::RoleTracker`) so that session presence and
/// role knowledge can change independently on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub display_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub registered_at: DateTime<Utc>,
    /// Set when an admin approved the account's first booking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_since: Option<DateTime<Utc>>,
}

/// Account row as listed on the admin screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountSummary {
    pub id: i64,
    pub display_name: String,
    pub email: String,
    pub role: String,
    pub registered_at: DateTime<Utc>,
}

/// Counts shown on the admin dashboard overview.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClubStats {
    pub total_courts: i64,
    pub total_users: i64,
    pub total_members: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_round_trips_through_wire_strings() {
        for role in [Role::User, Role::Member, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("MEMBER"), Some(Role::Member));
    }

    #[test]
    fn unknown_role_strings_do_not_parse() {
        for s in ["", "superadmin", "moderator", "User ", "null"] {
            assert_eq!(Role::parse(s), None, "{s:?} must not parse");
        }
    }
}
