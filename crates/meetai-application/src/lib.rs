//! Application layer of the Meet.AI view-state controller.
//!
//! Use cases here are the view controllers: they combine the domain types in
//! `meetai-core` with collaborator traits (repositories, auth, navigation,
//! notifications) and decide what each screen renders.

pub mod agents;
pub mod auth;
pub mod cache;
pub mod call;
pub mod list;
pub mod meetings;
pub mod removal;

pub use agents::{AgentDetail, AgentDetailUseCase, AgentFormUseCase, AgentsListUseCase};
pub use auth::{HomeUseCase, HomeView, SignInUseCase};
pub use cache::QueryCache;
pub use call::{CallEnded, CallParticipant, CallUseCase, CallView};
pub use list::ListPage;
pub use meetings::{MeetingDetail, MeetingDetailUseCase, MeetingFormUseCase, MeetingRow, MeetingsListUseCase};
pub use removal::{ConfirmedRemoval, REMOVE_CONFIRMATION_TITLE, RemovalOutcome, RemovalPlan};
