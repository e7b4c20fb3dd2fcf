//! Generated avatar images.

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// Avatar styles used across the app: initials for users, robots for agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, IntoStaticStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AvatarVariant {
    Initials,
    BotttsNeutral,
}

/// Produces an image URI for a seed string.
pub trait AvatarGenerator: Send + Sync {
    fn avatar_uri(&self, seed: &str, variant: AvatarVariant) -> String;
}
