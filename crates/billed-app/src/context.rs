//! Collaborator traits for the app services.
//!
//! Navigation and session lookup are injected at construction so the
//! services stay independent of any concrete UI shell or session storage.

use billed_core::models::SessionIdentity;

/// Replaces the current view with the one at `path`.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Resolves the authenticated employee for the current session.
pub trait SessionProvider: Send + Sync {
    fn current(&self) -> SessionIdentity;
}

/// Fixed identity, resolved once up front (e.g. from configuration or a
/// stored session record).
pub struct StaticSession(pub SessionIdentity);

impl SessionProvider for StaticSession {
    fn current(&self) -> SessionIdentity {
        self.0.clone()
    }
}
