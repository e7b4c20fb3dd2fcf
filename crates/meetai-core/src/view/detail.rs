use serde::{Deserialize, Serialize};

/// Heading and body text of a placeholder state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCopy {
    pub title: String,
    pub description: String,
}

impl StateCopy {
    /// "Loading Meeting" / "This may take a few seconds."
    pub fn loading(entity: &str) -> Self {
        Self {
            title: format!("Loading {}", entity),
            description: "This may take a few seconds.".to_string(),
        }
    }

    /// "Error Loading Meeting" / "Please try again later."
    pub fn error(entity: &str) -> Self {
        Self {
            title: format!("Error Loading {}", entity),
            description: "Please try again later.".to_string(),
        }
    }
}

/// State of a detail screen. Loading and error are distinct states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum DetailView<T> {
    Loading(StateCopy),
    Error(StateCopy),
    Ready(T),
}

impl<T> DetailView<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_ready(self) -> Option<T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}
