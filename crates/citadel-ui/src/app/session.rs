//! Session context shared across the view tree.
//!
//! The session is an explicit object provided at the app root; views consume
//! it through [`use_session`]. There is one session per browser profile, no
//! expiry and no token — the storage key is the whole story.

use crate::app::preferences::{clear_user, load_saved_user, persist_user};
use crate::core::session::Session;
use yew::prelude::*;

/// Shared session handle: current state plus login/logout intents.
#[derive(Clone, PartialEq)]
pub(crate) struct SessionCtx {
    state: UseStateHandle<Session>,
}

impl SessionCtx {
    pub(crate) fn new(state: UseStateHandle<Session>) -> Self {
        Self { state }
    }

    pub(crate) fn authenticated(&self) -> bool {
        self.state.authenticated()
    }

    /// Persist the username and mark the session authenticated. Credential
    /// verification is the login form's job, not ours.
    pub(crate) fn login(&self, username: &str) {
        persist_user(username);
        self.state.set(Session::logged_in(username));
    }

    /// Drop the persisted username and the in-memory session.
    pub(crate) fn logout(&self) {
        clear_user();
        self.state.set(Session::anonymous());
    }
}

/// Bootstrap the session state from local storage (trust-on-presence).
pub(crate) fn restore_session() -> Session {
    Session::restore(load_saved_user())
}

/// Access the session context.
///
/// # Panics
/// Panics when called outside the session provider; that is a view-tree
/// wiring bug, not a runtime condition, and must fail loudly.
#[hook]
pub(crate) fn use_session() -> SessionCtx {
    use_context::<SessionCtx>().expect("use_session called outside the session provider")
}
