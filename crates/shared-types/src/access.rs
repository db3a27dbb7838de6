//! Client-side access control: session and role gating for the dashboard.
//!
//! Everything here is plain data and pure functions so the guard logic can
//! be exercised without a rendering environment. The Dioxus layer only
//! wires signals into [`evaluate_session`] / [`evaluate_role`] and maps the
//! resulting [`AccessDecision`] onto render / redirect / placeholder.

use crate::models::{AuthUser, Role};
use std::fmt;
use std::sync::LazyLock;

/// Path the guards redirect to when no session exists.
pub const LOGIN_PATH: &str = "/login";

/// Landing page for authenticated navigation that a gate refuses.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Snapshot of the session store as the gates see it.
///
/// `Loading` covers initial bootstrap while persisted credentials are being
/// checked; gates must hold rather than redirect so a page refresh does not
/// flicker through the login screen.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Loading,
    Absent,
    Present(AuthUser),
}

impl SessionState {
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            SessionState::Present(user) => Some(user),
            _ => None,
        }
    }

    /// Identity key used to detect session switches.
    pub fn user_id(&self) -> Option<i64> {
        self.user().map(|u| u.id)
    }
}

/// Client-side knowledge of the session's role.
///
/// `Failed` (transport error or unrecognized wire value) is kept distinct
/// from a legitimate role mismatch so the two can be logged differently,
/// even though both currently surface as the same soft redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleState {
    Unresolved,
    Known(Role),
    Failed,
}

impl RoleState {
    pub fn role(&self) -> Option<Role> {
        match self {
            RoleState::Known(role) => Some(*role),
            _ => None,
        }
    }
}

/// Outcome of evaluating a gate for one navigation.
///
/// Computed fresh on every evaluation; never cached across navigations.
/// `Pending` is not terminal — it resolves once the session or role state
/// settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Render,
    RedirectTo(&'static str),
    Pending,
}

/// Session gate guarding the whole dashboard subtree.
///
/// Pure function of the session snapshot; safe to re-run on every change.
pub fn evaluate_session(session: &SessionState) -> AccessDecision {
    match session {
        SessionState::Loading => AccessDecision::Pending,
        SessionState::Absent => AccessDecision::RedirectTo(LOGIN_PATH),
        SessionState::Present(_) => AccessDecision::Render,
    }
}

/// Role gate for a single dashboard route.
///
/// An empty allow-list means the route only requires a session (the
/// dashboard landing page), so it renders in every role state — this is
/// what makes the `DASHBOARD_PATH` redirect target loop-free. For
/// role-restricted routes a `Render` is produced only from a resolved,
/// allowed role; failed resolution is denied like any wrong role.
pub fn evaluate_role(role: &RoleState, allowed: &[Role]) -> AccessDecision {
    if allowed.is_empty() {
        return AccessDecision::Render;
    }
    match role {
        RoleState::Unresolved => AccessDecision::Pending,
        RoleState::Known(role) if allowed.contains(role) => AccessDecision::Render,
        RoleState::Known(_) | RoleState::Failed => AccessDecision::RedirectTo(DASHBOARD_PATH),
    }
}

/// One dashboard route and the roles that may enter it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRule {
    /// Path segment under `/dashboard`, empty for the landing page.
    pub path: &'static str,
    /// Empty slice = any authenticated session.
    pub allowed: &'static [Role],
}

/// Error raised when the permission table is constructed inconsistently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    /// The same path was declared twice. Last-write-wins is forbidden;
    /// the table must fail at startup instead.
    DuplicatePath(&'static str),
}

impl fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTableError::DuplicatePath(path) => {
                write!(f, "dashboard path declared twice: {path:?}")
            }
        }
    }
}

impl std::error::Error for RouteTableError {}

/// Declarative path → allow-list mapping for the dashboard.
///
/// Single source of truth: the route guard and the sidebar menu both read
/// from here, so a menu entry can never point at a route its role cannot
/// enter.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new(rules: &[RouteRule]) -> Result<Self, RouteTableError> {
        for (i, rule) in rules.iter().enumerate() {
            if rules[..i].iter().any(|prev| prev.path == rule.path) {
                return Err(RouteTableError::DuplicatePath(rule.path));
            }
        }
        Ok(Self {
            rules: rules.to_vec(),
        })
    }

    /// Allow-list for a dashboard path segment, `None` if undeclared.
    pub fn lookup(&self, path: &str) -> Option<&'static [Role]> {
        self.rules
            .iter()
            .find(|rule| rule.path == path)
            .map(|rule| rule.allowed)
    }

    /// Whether `role` may enter `path` right now. Used by the sidebar so
    /// menu visibility and the route guard cannot diverge.
    pub fn allows(&self, path: &str, role: &RoleState) -> bool {
        match self.lookup(path) {
            Some(allowed) => evaluate_role(role, allowed) == AccessDecision::Render,
            None => false,
        }
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }
}

const ANY_ROLE: &[Role] = &[];
const USER_ONLY: &[Role] = &[Role::User];
const MEMBER_ONLY: &[Role] = &[Role::Member];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const USER_OR_MEMBER: &[Role] = &[Role::User, Role::Member];
const ALL_ROLES: &[Role] = &[Role::User, Role::Member, Role::Admin];

/// The dashboard surface. Paths reachable by several roles are enumerated
/// explicitly rather than defaulting to "any".
pub const DASHBOARD_RULES: &[RouteRule] = &[
    RouteRule { path: "", allowed: ANY_ROLE },
    // User
    RouteRule { path: "user-profile", allowed: USER_ONLY },
    RouteRule { path: "pending-bookings", allowed: USER_OR_MEMBER },
    RouteRule { path: "announcements", allowed: ALL_ROLES },
    // Member
    RouteRule { path: "member-profile", allowed: MEMBER_ONLY },
    RouteRule { path: "approved-bookings", allowed: MEMBER_ONLY },
    RouteRule { path: "confirmed-bookings", allowed: MEMBER_ONLY },
    RouteRule { path: "payment", allowed: MEMBER_ONLY },
    RouteRule { path: "payment-history", allowed: MEMBER_ONLY },
    // Admin
    RouteRule { path: "admin-profile", allowed: ADMIN_ONLY },
    RouteRule { path: "manage-bookings", allowed: ADMIN_ONLY },
    RouteRule { path: "manage-confirmed-bookings", allowed: ADMIN_ONLY },
    RouteRule { path: "manage-members", allowed: ADMIN_ONLY },
    RouteRule { path: "manage-users", allowed: ADMIN_ONLY },
    RouteRule { path: "manage-courts", allowed: ADMIN_ONLY },
    RouteRule { path: "manage-coupons", allowed: ADMIN_ONLY },
    RouteRule { path: "make-announcement", allowed: ADMIN_ONLY },
];

/// The validated dashboard permission table. Construction runs once at
/// first use; a duplicate path in [`DASHBOARD_RULES`] aborts startup.
pub static DASHBOARD_ROUTES: LazyLock<RouteTable> = LazyLock::new(|| {
    RouteTable::new(DASHBOARD_RULES).expect("dashboard permission table is statically defined")
});

/// Why a role lookup did not produce a usable role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleResolveError {
    /// Network / server error reaching the role endpoint.
    Transport,
    /// The endpoint answered with a value outside {user, member, admin}.
    UnknownRole,
}

/// Tracks one in-flight role resolution per session identity.
///
/// Each call to [`begin`](Self::begin) opens a new resolution epoch bound
/// to one session id and resets the state to `Unresolved`; a completion
/// carrying a stale epoch is discarded, so a slow lookup for a previous
/// session can never populate the role used by the current one. Readers
/// go through [`state_for`](Self::state_for) with the session they are
/// rendering, which reports `Unresolved` whenever the tracker is bound to
/// a different identity — a freshly switched session observes `Pending`
/// on the very first evaluation, before any effect has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleTracker {
    epoch: u64,
    session: Option<i64>,
    state: RoleState,
}

impl RoleTracker {
    pub fn new() -> Self {
        Self {
            epoch: 0,
            session: None,
            state: RoleState::Unresolved,
        }
    }

    /// Raw resolution state, regardless of which session it belongs to.
    pub fn state(&self) -> RoleState {
        self.state
    }

    /// Resolution state as seen by `session`. `Unresolved` unless the
    /// tracker is bound to exactly that session.
    pub fn state_for(&self, session: Option<i64>) -> RoleState {
        match (session, self.session) {
            (Some(current), Some(bound)) if current == bound => self.state,
            _ => RoleState::Unresolved,
        }
    }

    /// Start resolving for `session`. Returns the epoch the eventual
    /// completion must present.
    pub fn begin(&mut self, session: i64) -> u64 {
        self.epoch += 1;
        self.session = Some(session);
        self.state = RoleState::Unresolved;
        self.epoch
    }

    /// Drop interest in any in-flight resolution (logout, session gone).
    pub fn invalidate(&mut self) {
        self.epoch += 1;
        self.session = None;
        self.state = RoleState::Unresolved;
    }

    /// Apply a resolution outcome. Returns `false` (and changes nothing)
    /// when `epoch` is stale. Failures transition to `Failed` — never to
    /// some default role — and are not retried within the same epoch.
    pub fn complete(&mut self, epoch: u64, outcome: Result<Role, RoleResolveError>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.state = match outcome {
            Ok(role) => RoleState::Known(role),
            Err(_) => RoleState::Failed,
        };
        true
    }
}

impl Default for RoleTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn test_user(id: i64) -> AuthUser {
        AuthUser {
            id,
            display_name: format!("Player {id}"),
            email: format!("player{id}@example.com"),
            avatar_url: None,
            registered_at: Utc::now(),
            member_since: None,
        }
    }

    // ─── Session gate ───────────────────────────────────────────────────

    #[test]
    fn absent_session_redirects_to_login() {
        assert_eq!(
            evaluate_session(&SessionState::Absent),
            AccessDecision::RedirectTo(LOGIN_PATH)
        );
    }

    #[test]
    fn loading_session_holds_instead_of_redirecting() {
        assert_eq!(evaluate_session(&SessionState::Loading), AccessDecision::Pending);
    }

    #[test]
    fn present_session_renders_subtree() {
        assert_eq!(
            evaluate_session(&SessionState::Present(test_user(1))),
            AccessDecision::Render
        );
    }

    // ─── Role gate ──────────────────────────────────────────────────────

    #[test]
    fn render_iff_role_in_allow_list() {
        let allowed = &[Role::User, Role::Member];
        assert_eq!(
            evaluate_role(&RoleState::Known(Role::User), allowed),
            AccessDecision::Render
        );
        assert_eq!(
            evaluate_role(&RoleState::Known(Role::Member), allowed),
            AccessDecision::Render
        );
        assert_eq!(
            evaluate_role(&RoleState::Known(Role::Admin), allowed),
            AccessDecision::RedirectTo(DASHBOARD_PATH)
        );
    }

    #[test]
    fn unresolved_role_is_pending_regardless_of_allow_list() {
        for allowed in [USER_ONLY, MEMBER_ONLY, ADMIN_ONLY, ALL_ROLES] {
            assert_eq!(
                evaluate_role(&RoleState::Unresolved, allowed),
                AccessDecision::Pending
            );
        }
    }

    #[test]
    fn failed_resolution_is_denied_not_errored() {
        // user-profile requires {user}; a failed lookup must soft-redirect.
        let allowed = DASHBOARD_ROUTES.lookup("user-profile").unwrap();
        assert_eq!(
            evaluate_role(&RoleState::Failed, allowed),
            AccessDecision::RedirectTo(DASHBOARD_PATH)
        );
    }

    #[test]
    fn failed_resolution_never_unlocks_a_privileged_route() {
        for rule in DASHBOARD_RULES.iter().filter(|r| !r.allowed.is_empty()) {
            assert_eq!(
                evaluate_role(&RoleState::Failed, rule.allowed),
                AccessDecision::RedirectTo(DASHBOARD_PATH),
                "fail-open on {:?}",
                rule.path
            );
        }
    }

    #[test]
    fn session_only_route_renders_in_every_role_state() {
        for state in [
            RoleState::Unresolved,
            RoleState::Known(Role::User),
            RoleState::Failed,
        ] {
            assert_eq!(evaluate_role(&state, ANY_ROLE), AccessDecision::Render);
        }
    }

    #[test]
    fn member_cannot_enter_manage_courts() {
        let allowed = DASHBOARD_ROUTES.lookup("manage-courts").unwrap();
        assert_eq!(
            evaluate_role(&RoleState::Known(Role::Member), allowed),
            AccessDecision::RedirectTo(DASHBOARD_PATH)
        );
    }

    #[test]
    fn announcements_transition_pending_to_render() {
        let allowed = DASHBOARD_ROUTES.lookup("announcements").unwrap();
        assert_eq!(
            evaluate_role(&RoleState::Unresolved, allowed),
            AccessDecision::Pending
        );
        assert_eq!(
            evaluate_role(&RoleState::Known(Role::User), allowed),
            AccessDecision::Render
        );
    }

    #[test]
    fn gates_are_deterministic_for_fixed_inputs() {
        let allowed = DASHBOARD_ROUTES.lookup("payment").unwrap();
        let first = evaluate_role(&RoleState::Known(Role::Member), allowed);
        for _ in 0..10 {
            assert_eq!(evaluate_role(&RoleState::Known(Role::Member), allowed), first);
        }
    }

    // ─── Permission table ───────────────────────────────────────────────

    #[test]
    fn duplicate_path_is_a_construction_error() {
        let rules = [
            RouteRule { path: "payment", allowed: MEMBER_ONLY },
            RouteRule { path: "payment", allowed: ADMIN_ONLY },
        ];
        assert_eq!(
            RouteTable::new(&rules),
            Err(RouteTableError::DuplicatePath("payment"))
        );
    }

    #[test]
    fn dashboard_table_constructs() {
        assert_eq!(DASHBOARD_ROUTES.rules().len(), DASHBOARD_RULES.len());
    }

    #[test]
    fn every_restricted_path_has_a_nonempty_allow_list() {
        for rule in DASHBOARD_ROUTES.rules() {
            if rule.path.is_empty() {
                continue;
            }
            assert!(!rule.allowed.is_empty(), "{:?} has no allow-list", rule.path);
        }
    }

    #[test]
    fn announcements_are_reachable_by_all_three_roles() {
        let allowed = DASHBOARD_ROUTES.lookup("announcements").unwrap();
        assert_eq!(allowed, ALL_ROLES);
    }

    #[test]
    fn undeclared_path_is_never_allowed() {
        for state in [
            RoleState::Known(Role::Admin),
            RoleState::Known(Role::User),
            RoleState::Failed,
        ] {
            assert!(!DASHBOARD_ROUTES.allows("manage-secrets", &state));
        }
    }

    #[test]
    fn menu_visibility_matches_gate_decisions() {
        let member = RoleState::Known(Role::Member);
        assert!(DASHBOARD_ROUTES.allows("payment", &member));
        assert!(DASHBOARD_ROUTES.allows("pending-bookings", &member));
        assert!(!DASHBOARD_ROUTES.allows("user-profile", &member));
        assert!(!DASHBOARD_ROUTES.allows("manage-coupons", &member));
    }

    // ─── Role tracker ───────────────────────────────────────────────────

    #[test]
    fn resolution_completes_into_known_role() {
        let mut tracker = RoleTracker::new();
        let epoch = tracker.begin(1);
        assert_eq!(tracker.state(), RoleState::Unresolved);
        assert!(tracker.complete(epoch, Ok(Role::Member)));
        assert_eq!(tracker.state(), RoleState::Known(Role::Member));
        assert_eq!(tracker.state_for(Some(1)), RoleState::Known(Role::Member));
    }

    #[test]
    fn transport_failure_resolves_to_failed() {
        let mut tracker = RoleTracker::new();
        let epoch = tracker.begin(1);
        assert!(tracker.complete(epoch, Err(RoleResolveError::Transport)));
        assert_eq!(tracker.state(), RoleState::Failed);
    }

    #[test]
    fn late_result_for_superseded_session_is_discarded() {
        let mut tracker = RoleTracker::new();
        let first = tracker.begin(1);
        // Session switches before the first lookup lands.
        let second = tracker.begin(2);
        assert!(!tracker.complete(first, Ok(Role::Admin)));
        assert_eq!(tracker.state(), RoleState::Unresolved);
        assert!(tracker.complete(second, Ok(Role::User)));
        assert_eq!(tracker.state(), RoleState::Known(Role::User));
    }

    #[test]
    fn switched_session_reads_unresolved_before_any_new_lookup() {
        // The resolver runs after render, so the gate's first read for a
        // new session must already come back Unresolved rather than the
        // previous session's role.
        let mut tracker = RoleTracker::new();
        let epoch = tracker.begin(1);
        tracker.complete(epoch, Ok(Role::Admin));
        assert_eq!(tracker.state_for(Some(1)), RoleState::Known(Role::Admin));
        assert_eq!(tracker.state_for(Some(2)), RoleState::Unresolved);
        assert_eq!(tracker.state_for(None), RoleState::Unresolved);
    }

    #[test]
    fn invalidate_discards_in_flight_resolution() {
        let mut tracker = RoleTracker::new();
        let epoch = tracker.begin(1);
        tracker.invalidate();
        assert!(!tracker.complete(epoch, Ok(Role::Admin)));
        assert_eq!(tracker.state_for(Some(1)), RoleState::Unresolved);
    }
}
