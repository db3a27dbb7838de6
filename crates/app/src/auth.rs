use dioxus::prelude::*;
use shared_types::{AuthUser, SessionState};

/// Global session state. The session signal is the single writer surface:
/// the auth guard mirrors the server's answer into it, the login/signup
/// pages set it on success, and sign-out clears it. Everything else reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<SessionState>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            // Loading until the persisted-credential check answers, so the
            // guard shows a placeholder instead of bouncing to login.
            session: Signal::new(SessionState::Loading),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().user_id().is_some()
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.session.read().user().cloned()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.session.set(SessionState::Present(user));
    }

    pub fn clear_auth(&mut self) {
        self.session.set(SessionState::Absent);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
