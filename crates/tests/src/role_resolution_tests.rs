//! Lifecycle of the client-side role tracker: one resolution per session
//! identity, stale results discarded, failures parked fail-closed.

use pretty_assertions::assert_eq;
use shared_types::{Role, RoleResolveError, RoleState, RoleTracker};

#[test]
fn fresh_tracker_is_unresolved() {
    assert_eq!(RoleTracker::new().state(), RoleState::Unresolved);
}

#[test]
fn begin_resets_a_previously_resolved_role() {
    let mut tracker = RoleTracker::new();
    let epoch = tracker.begin(1);
    tracker.complete(epoch, Ok(Role::Admin));
    assert_eq!(tracker.state(), RoleState::Known(Role::Admin));

    // New session identity: the admin role from the old session must not
    // leak while the new lookup is in flight.
    tracker.begin(2);
    assert_eq!(tracker.state(), RoleState::Unresolved);
}

#[test]
fn late_result_for_previous_session_never_lands() {
    let mut tracker = RoleTracker::new();
    let s1 = tracker.begin(1);
    let s2 = tracker.begin(2);

    // S1's lookup finishes after the switch to S2.
    assert!(!tracker.complete(s1, Ok(Role::Admin)));
    assert_eq!(tracker.state_for(Some(2)), RoleState::Unresolved);

    // S2's own result still applies normally.
    assert!(tracker.complete(s2, Ok(Role::Member)));
    assert_eq!(tracker.state_for(Some(2)), RoleState::Known(Role::Member));
}

#[test]
fn results_arriving_out_of_order_respect_epochs() {
    let mut tracker = RoleTracker::new();
    let s1 = tracker.begin(1);
    let s2 = tracker.begin(2);

    assert!(tracker.complete(s2, Err(RoleResolveError::Transport)));
    assert_eq!(tracker.state(), RoleState::Failed);

    // The stale success must not overwrite the current failure.
    assert!(!tracker.complete(s1, Ok(Role::Admin)));
    assert_eq!(tracker.state(), RoleState::Failed);
}

#[test]
fn resolved_role_is_scoped_to_its_session() {
    let mut tracker = RoleTracker::new();
    let epoch = tracker.begin(1);
    tracker.complete(epoch, Ok(Role::Admin));

    // A gate rendering for a different (or no) session sees Unresolved,
    // never the other session's admin role.
    assert_eq!(tracker.state_for(Some(1)), RoleState::Known(Role::Admin));
    assert_eq!(tracker.state_for(Some(7)), RoleState::Unresolved);
    assert_eq!(tracker.state_for(None), RoleState::Unresolved);
}

#[test]
fn unknown_wire_value_fails_resolution() {
    // The transport layer maps unparseable role strings to UnknownRole;
    // the tracker treats that exactly like a network failure.
    let mut tracker = RoleTracker::new();
    let epoch = tracker.begin(1);
    let outcome = Role::parse("superuser").ok_or(RoleResolveError::UnknownRole);
    assert!(tracker.complete(epoch, outcome));
    assert_eq!(tracker.state_for(Some(1)), RoleState::Failed);
}

#[test]
fn failure_is_not_retried_within_the_same_epoch() {
    let mut tracker = RoleTracker::new();
    let epoch = tracker.begin(1);
    tracker.complete(epoch, Err(RoleResolveError::Transport));

    // The first answer for an epoch is the only one that ever lands; a
    // retry requires a fresh begin() for a new session state.
    assert_eq!(tracker.state(), RoleState::Failed);
    let next = tracker.begin(1);
    assert_eq!(tracker.state(), RoleState::Unresolved);
    assert!(tracker.complete(next, Ok(Role::User)));
    assert_eq!(tracker.state_for(Some(1)), RoleState::Known(Role::User));
}

#[test]
fn logout_invalidates_interest_in_inflight_lookup() {
    let mut tracker = RoleTracker::new();
    let epoch = tracker.begin(1);
    tracker.invalidate();
    assert!(!tracker.complete(epoch, Ok(Role::Member)));
    assert_eq!(tracker.state_for(Some(1)), RoleState::Unresolved);
}
