//! Domain layer of the Meet.AI view-state controller.
//!
//! - [`meeting`]: meetings, their status and the render-state resolver
//! - [`agent`]: agents
//! - [`filter`]: list filter state and its query-string form
//! - [`confirm`]: confirmation gate for destructive actions
//! - [`user`]: auth session and the `AuthService` collaborator
//! - [`view`], [`query`], [`avatar`]: UI-side collaborators

pub mod agent;
pub mod avatar;
pub mod config;
pub mod confirm;
pub mod error;
pub mod filter;
pub mod meeting;
pub mod pagination;
pub mod query;
pub mod user;
pub mod view;

// Re-export common error type
pub use error::MeetError;
