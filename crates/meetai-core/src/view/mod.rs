//! View-facing state and UI collaborators.
//!
//! # Module Structure
//!
//! - `detail`: `DetailView`, the loading/error/ready state of a detail screen
//! - `navigation`: `Navigator` trait (routing)
//! - `notification`: `Notifier` trait (transient toasts)

mod detail;
mod navigation;
mod notification;

pub use detail::{DetailView, StateCopy};
pub use navigation::Navigator;
pub use notification::{Notification, NotificationLevel, Notifier};
