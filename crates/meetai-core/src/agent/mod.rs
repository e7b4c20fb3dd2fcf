//! Agent domain module.
//!
//! # Module Structure
//!
//! - `model`: `Agent` and its form input
//! - `repository`: `AgentRepository` collaborator trait and its list query

mod model;
pub mod repository;

// Re-export public API
pub use model::{Agent, AgentInput};
pub use repository::{AgentRepository, AgentsQuery};
