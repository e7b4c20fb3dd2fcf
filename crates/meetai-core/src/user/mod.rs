//! User/auth domain module.
//!
//! # Module Structure
//!
//! - `model`: `UserSession`, `Credentials`, `SocialProvider`
//! - `service`: `AuthService` collaborator trait
//!
//! # Usage
//!
//! ```ignore
//! use meetai_core::user::{AuthService, UserSession};
//! ```

mod model;
mod service;

// Re-export public API
pub use model::{Credentials, SocialProvider, UserSession};
pub use service::AuthService;
