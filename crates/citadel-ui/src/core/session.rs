//! Session model and demo credential verification.
//!
//! # Design
//! - Keep the session as simple data so callers can store/clear it without
//!   side effects; persistence lives with the app shell.
//! - A restored username authenticates by presence alone. There is no token
//!   and no re-check against the password; anyone who can write the storage
//!   key owns the session. Acceptable for a demo login, nothing more.

/// Hardcoded demo username accepted by the login form.
pub const DEMO_USERNAME: &str = "admin";

/// Hardcoded demo password accepted by the login form.
pub const DEMO_PASSWORD: &str = "password";

/// Local record of who is logged in. Not a server-issued credential.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    username: Option<String>,
}

impl Session {
    /// The unauthenticated session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { username: None }
    }

    /// Session for a freshly verified login.
    #[must_use]
    pub fn logged_in(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    /// Rehydrate from a previously persisted username. Blank values are
    /// treated as no session.
    #[must_use]
    pub fn restore(saved: Option<String>) -> Self {
        Self {
            username: saved.filter(|name| !name.trim().is_empty()),
        }
    }

    /// Whether a user is logged in.
    #[must_use]
    pub const fn authenticated(&self) -> bool {
        self.username.is_some()
    }

    /// The logged-in username, when any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

/// Check a credential pair against the single demo account.
#[must_use]
pub fn verify_credentials(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_demo_pair_verifies() {
        assert!(verify_credentials("admin", "password"));
        assert!(!verify_credentials("admin", "hunter2"));
        assert!(!verify_credentials("root", "password"));
        assert!(!verify_credentials("", ""));
        // Exact match only; no trimming or case folding.
        assert!(!verify_credentials("Admin", "password"));
        assert!(!verify_credentials("admin", "password "));
    }

    #[test]
    fn restore_authenticates_on_presence() {
        assert!(Session::restore(Some("admin".into())).authenticated());
        assert_eq!(
            Session::restore(Some("admin".into())).username(),
            Some("admin")
        );
    }

    #[test]
    fn restore_rejects_absent_or_blank_values() {
        assert!(!Session::restore(None).authenticated());
        assert!(!Session::restore(Some(String::new())).authenticated());
        assert!(!Session::restore(Some("   ".into())).authenticated());
    }

    #[test]
    fn logout_round_trip() {
        let session = Session::logged_in("admin");
        assert!(session.authenticated());
        let session = Session::anonymous();
        assert!(!session.authenticated());
        assert_eq!(session.username(), None);
    }
}
