//! End-to-end walkthroughs of the navigation decision chain: session gate,
//! then role gate against the permission table.

use chrono::Utc;
use pretty_assertions::assert_eq;
use shared_types::{
    evaluate_role, evaluate_session, AccessDecision, AuthUser, Role, RoleState, SessionState,
    DASHBOARD_PATH, DASHBOARD_ROUTES, LOGIN_PATH,
};

fn player(id: i64) -> AuthUser {
    AuthUser {
        id,
        display_name: "Test Player".to_string(),
        email: format!("player{id}@courtside.club"),
        avatar_url: None,
        registered_at: Utc::now(),
        member_since: None,
    }
}

/// One navigation through both gates, the way the router layers compose
/// them: the role gate only runs once the session gate has rendered.
fn navigate(session: &SessionState, role: &RoleState, path: &str) -> AccessDecision {
    match evaluate_session(session) {
        AccessDecision::Render => {}
        blocked => return blocked,
    }
    let allowed = DASHBOARD_ROUTES
        .lookup(path)
        .expect("navigation test paths must be declared");
    evaluate_role(role, allowed)
}

#[test]
fn absent_session_redirects_to_login_on_every_dashboard_path() {
    for rule in DASHBOARD_ROUTES.rules() {
        assert_eq!(
            navigate(&SessionState::Absent, &RoleState::Unresolved, rule.path),
            AccessDecision::RedirectTo(LOGIN_PATH),
            "path {:?}",
            rule.path
        );
    }
}

#[test]
fn bootstrap_loading_holds_every_dashboard_path() {
    for rule in DASHBOARD_ROUTES.rules() {
        assert_eq!(
            navigate(&SessionState::Loading, &RoleState::Known(Role::Admin), rule.path),
            AccessDecision::Pending,
            "path {:?}",
            rule.path
        );
    }
}

#[test]
fn session_absent_on_payment_redirects_regardless_of_role_state() {
    for role in [
        RoleState::Unresolved,
        RoleState::Known(Role::Member),
        RoleState::Failed,
    ] {
        assert_eq!(
            navigate(&SessionState::Absent, &role, "payment"),
            AccessDecision::RedirectTo(LOGIN_PATH)
        );
    }
}

#[test]
fn member_on_manage_courts_soft_redirects_to_dashboard_root() {
    let session = SessionState::Present(player(1));
    assert_eq!(
        navigate(&session, &RoleState::Known(Role::Member), "manage-courts"),
        AccessDecision::RedirectTo(DASHBOARD_PATH)
    );
}

#[test]
fn announcements_pend_then_render_once_role_resolves() {
    let session = SessionState::Present(player(1));
    assert_eq!(
        navigate(&session, &RoleState::Unresolved, "announcements"),
        AccessDecision::Pending
    );
    assert_eq!(
        navigate(&session, &RoleState::Known(Role::User), "announcements"),
        AccessDecision::Render
    );
}

#[test]
fn failed_resolution_on_user_profile_is_a_soft_redirect() {
    let session = SessionState::Present(player(1));
    assert_eq!(
        navigate(&session, &RoleState::Failed, "user-profile"),
        AccessDecision::RedirectTo(DASHBOARD_PATH)
    );
}

#[test]
fn failed_resolution_still_reaches_the_dashboard_root() {
    // The redirect target itself must admit a failed role, otherwise the
    // soft redirect would loop.
    let session = SessionState::Present(player(1));
    assert_eq!(
        navigate(&session, &RoleState::Failed, ""),
        AccessDecision::Render
    );
}

#[test]
fn decisions_are_stable_across_repeated_evaluation() {
    let session = SessionState::Present(player(1));
    let role = RoleState::Known(Role::Member);
    for rule in DASHBOARD_ROUTES.rules() {
        let first = navigate(&session, &role, rule.path);
        for _ in 0..5 {
            assert_eq!(navigate(&session, &role, rule.path), first, "path {:?}", rule.path);
        }
    }
}

#[test]
fn every_role_renders_exactly_its_own_profile_page() {
    let session = SessionState::Present(player(1));
    let profiles = ["user-profile", "member-profile", "admin-profile"];
    for (role, own) in [
        (Role::User, "user-profile"),
        (Role::Member, "member-profile"),
        (Role::Admin, "admin-profile"),
    ] {
        for path in profiles {
            let expected = if path == own {
                AccessDecision::Render
            } else {
                AccessDecision::RedirectTo(DASHBOARD_PATH)
            };
            assert_eq!(
                navigate(&session, &RoleState::Known(role), path),
                expected,
                "role {role:?} on {path:?}"
            );
        }
    }
}

#[test]
fn pending_bookings_admits_users_and_members_but_not_admins() {
    let session = SessionState::Present(player(1));
    assert_eq!(
        navigate(&session, &RoleState::Known(Role::User), "pending-bookings"),
        AccessDecision::Render
    );
    assert_eq!(
        navigate(&session, &RoleState::Known(Role::Member), "pending-bookings"),
        AccessDecision::Render
    );
    assert_eq!(
        navigate(&session, &RoleState::Known(Role::Admin), "pending-bookings"),
        AccessDecision::RedirectTo(DASHBOARD_PATH)
    );
}
