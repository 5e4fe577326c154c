//! # Session Gate
//!
//! Post-login navigation state machine.
//!
//! The client observes two booleans from its auth state, `is_loading` and
//! `is_authenticated`, plus its current path. When loading settles with the
//! user authenticated while they sit on the landing page, the gate emits a
//! single navigation to the dashboard. Repeated observations of the same
//! settled state emit nothing; a fresh unauthenticated → authenticated
//! transition re-arms the gate.
//!
//! This replaces an ambient provider/consumer context with an explicit
//! state object the caller owns.

/// Path the gate redirects away from.
pub const LANDING_PATH: &str = "/";

/// Destination after a successful login.
pub const POST_LOGIN_PATH: &str = "/dashboard";

/// One-shot post-login redirect gate.
#[derive(Debug, Default)]
pub struct SessionGate {
    /// Whether the current authenticated transition has been consumed.
    consumed: bool,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one observation of the auth state; returns the navigation target
    /// when the gate fires.
    ///
    /// - While loading, nothing happens.
    /// - While unauthenticated, the gate re-arms.
    /// - The first settled authenticated observation consumes the transition;
    ///   it fires only if the caller is on the landing path at that moment.
    pub fn observe(
        &mut self,
        is_loading: bool,
        is_authenticated: bool,
        current_path: &str,
    ) -> Option<&'static str> {
        if is_loading {
            return None;
        }

        if !is_authenticated {
            self.consumed = false;
            return None;
        }

        if self.consumed {
            return None;
        }
        self.consumed = true;

        (current_path == LANDING_PATH).then_some(POST_LOGIN_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_on_landing_path() {
        let mut gate = SessionGate::new();

        assert_eq!(gate.observe(false, true, "/"), Some(POST_LOGIN_PATH));
        // Subsequent renders of the same settled state must not re-fire.
        assert_eq!(gate.observe(false, true, "/"), None);
        assert_eq!(gate.observe(false, true, "/"), None);
    }

    #[test]
    fn test_no_fire_while_loading() {
        let mut gate = SessionGate::new();

        assert_eq!(gate.observe(true, true, "/"), None);
        assert_eq!(gate.observe(false, true, "/"), Some(POST_LOGIN_PATH));
    }

    #[test]
    fn test_no_fire_off_landing_path() {
        let mut gate = SessionGate::new();

        assert_eq!(gate.observe(false, true, "/checkout"), None);
        // The transition is consumed even off the landing path; navigating
        // back to the landing page must not trigger a late redirect.
        assert_eq!(gate.observe(false, true, "/"), None);
    }

    #[test]
    fn test_no_fire_while_unauthenticated() {
        let mut gate = SessionGate::new();

        assert_eq!(gate.observe(false, false, "/"), None);
        assert_eq!(gate.observe(false, false, "/"), None);
    }

    #[test]
    fn test_rearms_after_logout() {
        let mut gate = SessionGate::new();

        assert_eq!(gate.observe(false, true, "/"), Some(POST_LOGIN_PATH));
        // Logout...
        assert_eq!(gate.observe(false, false, "/"), None);
        // ...and a fresh login fires again.
        assert_eq!(gate.observe(false, true, "/"), Some(POST_LOGIN_PATH));
    }
}
