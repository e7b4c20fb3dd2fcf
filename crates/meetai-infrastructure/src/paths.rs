//! Platform paths for meetai configuration files.
//!
//! ```text
//! ~/.config/meetai/            # Config directory (XDG on Linux)
//! └── config.toml              # Application configuration
//! ```

use meetai_core::MeetError;
use meetai_core::error::Result;
use std::path::PathBuf;

const APP_DIR: &str = "meetai";
const CONFIG_FILE: &str = "config.toml";

pub struct MeetPaths;

impl MeetPaths {
    /// Returns the meetai configuration directory (e.g. `~/.config/meetai/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| MeetError::config("Cannot find config directory"))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
