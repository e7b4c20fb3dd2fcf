/// Routing collaborator.
pub trait Navigator: Send + Sync {
    /// Navigates to `route`, e.g. `/meetings`.
    fn push(&self, route: &str);
}
