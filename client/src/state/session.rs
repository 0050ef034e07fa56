//! Login-gate state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend keeps the session in a cookie; the client only remembers who
//! logged in so the gate can be dismissed. There is no session probe, so a
//! fresh page load always starts logged out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub username: Option<String>,
    /// A login request is in flight.
    pub busy: bool,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn sign_in(&mut self, username: &str) {
        self.username = Some(username.to_owned());
        self.busy = false;
    }
}

/// Trimmed username, or `None` when nothing usable was typed.
pub fn validate_username(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
