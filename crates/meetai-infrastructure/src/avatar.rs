//! DiceBear avatar URLs.

use meetai_core::avatar::{AvatarGenerator, AvatarVariant};

const DICEBEAR_BASE_URL: &str = "https://api.dicebear.com/9.x";

/// Builds DiceBear HTTP API image URLs for a seed.
#[derive(Debug, Clone)]
pub struct DicebearAvatarGenerator {
    base_url: String,
}

impl DicebearAvatarGenerator {
    pub fn new() -> Self {
        Self::with_base_url(DICEBEAR_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for DicebearAvatarGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarGenerator for DicebearAvatarGenerator {
    fn avatar_uri(&self, seed: &str, variant: AvatarVariant) -> String {
        let style: &'static str = variant.into();
        let mut uri = format!(
            "{}/{}/svg?seed={}",
            self.base_url,
            style,
            urlencoding::encode(seed)
        );
        if variant == AvatarVariant::Initials {
            uri.push_str("&fontWeight=500&fontSize=42");
        }
        uri
    }
}
