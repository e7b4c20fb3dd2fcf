//! Meeting domain module.
//!
//! # Module Structure
//!
//! - `model`: `Meeting`, `MeetingStatus` and form input
//! - `render`: status → render-state resolution
//! - `repository`: `MeetingRepository` collaborator trait and its list query
//!
//! # Usage
//!
//! ```ignore
//! use meetai_core::meeting::{Meeting, MeetingStatus, MeetingRenderState};
//! ```

mod model;
mod render;
pub mod repository;

// Re-export public API
pub use model::{Meeting, MeetingInput, MeetingStatus};
pub use render::{Affordance, MeetingRenderState, call_href};
pub use repository::{MeetingRepository, MeetingsQuery};
