//! Agent view use cases.

mod detail;
mod form;
mod list;

pub use detail::{AgentDetail, AgentDetailUseCase};
pub use form::AgentFormUseCase;
pub use list::AgentsListUseCase;
