/// Role required for edit and delete operations.
pub const ADMIN_ROLE: &str = "Admin";

/// Port (interface) for the caller's session identity and role membership.
/// The hosting layer (web framework, test harness) provides the
/// implementation; the controller only ever sees this capability.
pub trait AuthSession: Send + Sync {
    /// Stable identifier of the signed-in user, if any.
    fn user_id(&self) -> Option<String>;

    fn is_in_role(&self, role: &str) -> bool;

    fn is_authenticated(&self) -> bool {
        self.user_id().is_some()
    }
}
