//! Session context
//!
//! Holds the zero-or-one signed-in principal. Passed explicitly to whatever
//! needs it; there is no process-wide session.

use campus_core::{AuthGate, Decision, Fixtures, Principal, Session, View};
use uuid::Uuid;

use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct SessionContext {
    current: Option<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub login: look the principal up by email, no credential check.
    /// Replaces any session already active.
    pub fn login(&mut self, fixtures: &Fixtures, email: &str) -> Result<&Principal> {
        let principal = fixtures
            .find_user_by_email(email)
            .cloned()
            .ok_or_else(|| Error::UnknownUser(email.to_string()))?;

        if let Some(previous) = self.current.take() {
            tracing::info!(session_id = %previous.id, "Replacing active session");
        }

        let session = Session::new(principal);
        tracing::info!(
            session_id = %session.id,
            user_id = %session.principal.id,
            role = %session.principal.role,
            "Signed in"
        );
        Ok(&self.current.insert(session).principal)
    }

    /// End the session; returns it if one was active
    pub fn logout(&mut self) -> Option<Session> {
        let session = self.current.take()?;
        tracing::info!(session_id = %session.id, "Signed out");
        Some(session)
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.current.as_ref().map(|s| &s.principal)
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.current.as_ref().map(|s| s.id)
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    /// Gate a navigation against the current principal
    pub fn authorize(&self, view: View) -> Decision {
        let decision = AuthGate::authorize_view(self.principal(), view);
        if decision != Decision::Allow {
            tracing::warn!(view = view.path(), ?decision, "Navigation blocked");
        }
        decision
    }

    /// Like [`authorize`](Self::authorize) but as a `Result` for view code
    pub fn require(&self, view: View) -> Result<&Principal> {
        match self.authorize(view) {
            Decision::Allow => self.principal().ok_or(Error::LoginRequired(view)),
            Decision::RedirectToLogin => Err(Error::LoginRequired(view)),
            Decision::Deny => Err(Error::Forbidden(view)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::Role;

    #[test]
    fn test_login_and_logout() {
        let fixtures = Fixtures::seed();
        let mut session = SessionContext::new();
        assert!(!session.is_signed_in());

        let principal = session.login(&fixtures, "abpatel@campus.edu").unwrap();
        assert_eq!(principal.role, Role::Admin);
        assert!(session.session_id().is_some());

        let ended = session.logout().unwrap();
        assert_eq!(ended.principal.email, "abpatel@campus.edu");
        assert!(session.principal().is_none());
        assert!(session.logout().is_none());
    }

    #[test]
    fn test_unknown_user_leaves_state_alone() {
        let fixtures = Fixtures::seed();
        let mut session = SessionContext::new();
        session.login(&fixtures, "vzala@campus.edu").unwrap();

        let err = session.login(&fixtures, "ghost@campus.edu").unwrap_err();
        assert!(matches!(err, Error::UnknownUser(_)));
        assert_eq!(session.principal().unwrap().role, Role::Professor);
    }

    #[test]
    fn test_relogin_replaces_session() {
        let fixtures = Fixtures::seed();
        let mut session = SessionContext::new();
        session.login(&fixtures, "vzala@campus.edu").unwrap();
        let first = session.session_id();

        session.login(&fixtures, "mdave@student.campus.edu").unwrap();
        assert_ne!(session.session_id(), first);
        assert_eq!(session.principal().unwrap().role, Role::Student);
    }

    #[test]
    fn test_gate_reevaluated_on_login_and_logout() {
        let fixtures = Fixtures::seed();
        let mut session = SessionContext::new();

        assert_eq!(session.authorize(View::AdminDashboard), Decision::RedirectToLogin);

        session.login(&fixtures, "mdave@student.campus.edu").unwrap();
        assert_eq!(session.authorize(View::AdminDashboard), Decision::Deny);
        assert!(matches!(
            session.require(View::AdminDashboard),
            Err(Error::Forbidden(View::AdminDashboard))
        ));
        assert!(session.require(View::StudentDashboard).is_ok());

        session.logout();
        assert!(matches!(
            session.require(View::StudentDashboard),
            Err(Error::LoginRequired(_))
        ));
    }
}
