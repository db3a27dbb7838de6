use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::{Role, RoleResolveError, RoleState, RoleTracker};

/// Shared role-resolution state, owned by the application root and driven
/// by [`use_role_resolver`].
#[derive(Clone, Copy, Debug)]
pub struct RoleStore {
    pub tracker: Signal<RoleTracker>,
}

impl RoleStore {
    pub fn new() -> Self {
        Self {
            tracker: Signal::new(RoleTracker::new()),
        }
    }
}

pub fn use_role_store() -> RoleStore {
    use_context::<RoleStore>()
}

/// Current role-resolution state for the current session. Reading
/// subscribes the caller, so gates re-evaluate when resolution completes.
/// Keyed by session identity: right after a session switch this reports
/// `Unresolved` even before the resolver effect has fired, so no frame
/// can render against the previous session's role.
pub fn use_role() -> RoleState {
    let auth = use_auth();
    let store = use_role_store();
    let session = auth.session.read().user_id();
    let state = store.tracker.read().state_for(session);
    state
}

/// Drives role resolution: one lookup per session identity.
///
/// The effect keys on the session's user id, so it fires on login, logout
/// and account switch — not on unrelated re-renders. Each firing opens a
/// new tracker epoch; the spawned lookup hands its result back together
/// with that epoch and the tracker discards it if the session has moved on
/// in the meantime. Failures park the tracker in `Failed` — there is no
/// retry until the session changes again.
pub fn use_role_resolver() {
    let auth = use_auth();
    let store = use_role_store();
    let session_user = use_memo(move || auth.session.read().user_id());

    use_effect(move || {
        let mut tracker = store.tracker;
        match session_user() {
            None => {
                tracker.write().invalidate();
            }
            Some(user_id) => {
                let epoch = tracker.write().begin(user_id);
                spawn(async move {
                    let outcome = match server::api::get_my_role().await {
                        Ok(value) => Role::parse(&value).ok_or(RoleResolveError::UnknownRole),
                        Err(_) => Err(RoleResolveError::Transport),
                    };
                    let applied = tracker.write().complete(epoch, outcome);
                    if !applied {
                        tracing::debug!(user_id, "discarding role result for superseded session");
                    } else if let Err(reason) = outcome {
                        tracing::warn!(user_id, ?reason, "role resolution failed");
                    }
                });
            }
        }
    });
}
