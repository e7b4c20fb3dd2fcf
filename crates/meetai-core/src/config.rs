//! Root configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer; every section is
//! optional and falls back to the defaults below.

use serde::{Deserialize, Serialize};

/// First page of every paginated list. Pages are 1-indexed.
pub const DEFAULT_PAGE: u32 = 1;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RootConfig {
    #[serde(default)]
    pub pagination: PaginationSettings,
    #[serde(default)]
    pub routes: RouteSettings,
}

/// Page sizing for list queries.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PaginationSettings {
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "max_page_size")]
    pub max_page_size: u32,
}

fn default_page_size() -> u32 {
    10
}

fn max_page_size() -> u32 {
    100
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: max_page_size(),
        }
    }
}

impl PaginationSettings {
    /// The configured page size clamped into `1..=max_page_size`.
    pub fn page_size(&self) -> u32 {
        self.default_page_size.clamp(1, self.max_page_size.max(1))
    }
}

/// Route targets used for navigation after mutations and auth changes.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteSettings {
    #[serde(default = "default_agents_route")]
    pub agents: String,
    #[serde(default = "default_meetings_route")]
    pub meetings: String,
    #[serde(default = "default_sign_in_route")]
    pub sign_in: String,
    #[serde(default = "default_home_route")]
    pub home: String,
}

fn default_agents_route() -> String {
    "/agents".to_string()
}

fn default_meetings_route() -> String {
    "/meetings".to_string()
}

fn default_sign_in_route() -> String {
    "/sign-in".to_string()
}

fn default_home_route() -> String {
    "/".to_string()
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            agents: default_agents_route(),
            meetings: default_meetings_route(),
            sign_in: default_sign_in_route(),
            home: default_home_route(),
        }
    }
}

impl RouteSettings {
    /// Detail route of a single meeting, e.g. `/meetings/abc`.
    pub fn meeting(&self, meeting_id: &str) -> String {
        format!("{}/{}", self.meetings.trim_end_matches('/'), meeting_id)
    }

    /// Detail route of a single agent, e.g. `/agents/abc`.
    pub fn agent(&self, agent_id: &str) -> String {
        format!("{}/{}", self.agents.trim_end_matches('/'), agent_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RootConfig::default();
        assert_eq!(config.pagination.page_size(), 10);
        assert_eq!(config.routes.meetings, "/meetings");
        assert_eq!(config.routes.meeting("m1"), "/meetings/m1");
    }

    #[test]
    fn test_partial_toml_falls_back() {
        let config: RootConfig = toml::from_str(
            r#"
            [pagination]
            default_page_size = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.pagination.page_size(), 25);
        assert_eq!(config.pagination.max_page_size, 100);
        assert_eq!(config.routes, RouteSettings::default());
    }

    #[test]
    fn test_page_size_clamped() {
        let settings = PaginationSettings {
            default_page_size: 500,
            max_page_size: 100,
        };
        assert_eq!(settings.page_size(), 100);

        let zero = PaginationSettings {
            default_page_size: 0,
            max_page_size: 100,
        };
        assert_eq!(zero.page_size(), 1);
    }
}
