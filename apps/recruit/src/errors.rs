use thiserror::Error;

use crate::api_client::ApiError;

/// Workflow-level error type.
/// Every variant converts into a user-facing `Notice`; none of them is fatal.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request failed: {0}")]
    Request(#[from] ApiError),

    #[error("Another {0} is already in progress")]
    Busy(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Success,
    Destructive,
}

/// A short message shown to the user after an action completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Success,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

impl WorkflowError {
    /// Converts the error into a notice. `failure_title` and `failure_description`
    /// are used for request failures, whose cause is never shown to the user.
    /// Pure: logging happens where the error is raised.
    pub fn notice(&self, failure_title: &str, failure_description: &str) -> Notice {
        match self {
            WorkflowError::Validation(msg) => Notice::destructive("Missing information", msg.clone()),
            WorkflowError::Request(_) => Notice::destructive(failure_title, failure_description),
            WorkflowError::Busy(what) => Notice::destructive(
                "Please wait",
                format!("A {what} is already in progress."),
            ),
            WorkflowError::Io(e) => Notice::destructive(
                "File unavailable",
                format!("The selected file could not be read: {e}"),
            ),
        }
    }
}
