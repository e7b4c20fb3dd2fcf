//! Infrastructure layer of the Meet.AI view-state controller.
//!
//! Concrete collaborators behind the traits in `meetai-core`:
//! - [`memory_backend`]: in-memory agents/meetings store
//! - [`auth_service`]: in-memory auth sessions
//! - [`avatar`]: DiceBear avatar URLs
//! - [`config_service`] / [`paths`]: TOML configuration loading

pub mod auth_service;
pub mod avatar;
pub mod config_service;
pub mod memory_backend;
pub mod paths;

pub use auth_service::InMemoryAuthService;
pub use avatar::DicebearAvatarGenerator;
pub use config_service::ConfigService;
pub use memory_backend::InMemoryBackend;
pub use paths::MeetPaths;
