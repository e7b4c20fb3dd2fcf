//! Confirmation gate for destructive actions.
//!
//! A request is split into two single-use halves: the caller awaits a
//! [`PendingConfirmation`], and the dialog resolves the matching
//! [`ConfirmationResponder`]. Closing the dialog resolves `false`.
//!
//! # Usage
//!
//! ```ignore
//! let gate = ConfirmationGate::new(presenter);
//! if gate.request_confirmation("Are you sure?", "...").await? {
//!     repository.remove(id).await?;
//! }
//! ```

mod gate;
mod request;

pub use gate::{ConfirmationGate, ConfirmationPresenter};
pub use request::{
    ConfirmationPrompt, ConfirmationRequest, ConfirmationResponder, PendingConfirmation,
};
