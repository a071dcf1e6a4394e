use crate::views::{Notice, NoticeLevel};

#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type HubResult<T> = Result<T, HubError>;

impl HubError {
    pub fn validation(msg: impl Into<String>) -> Self {
        HubError::Validation(msg.into())
    }

    pub fn storage(err: impl std::fmt::Display) -> Self {
        HubError::Storage(err.to_string())
    }
}

impl From<&HubError> for Notice {
    fn from(err: &HubError) -> Self {
        match err {
            HubError::Validation(msg) | HubError::NotFound(msg) => {
                Notice::new(NoticeLevel::Error, msg.clone())
            }
            HubError::NotAuthenticated => {
                Notice::new(NoticeLevel::Error, "Please sign in to continue")
            }
            HubError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                Notice::new(NoticeLevel::Error, "Could not save your changes")
            }
            HubError::Json(e) => {
                tracing::error!("JSON error: {}", e);
                Notice::new(NoticeLevel::Error, "Could not save your changes")
            }
            HubError::Template(msg) | HubError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                Notice::new(NoticeLevel::Error, "Something went wrong")
            }
        }
    }
}

impl From<HubError> for Notice {
    fn from(err: HubError) -> Self {
        Notice::from(&err)
    }
}

impl From<anyhow::Error> for HubError {
    fn from(err: anyhow::Error) -> Self {
        HubError::Internal(err.to_string())
    }
}
