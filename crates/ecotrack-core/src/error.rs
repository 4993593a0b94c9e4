use thiserror::Error;

#[derive(Debug, Error)]
pub enum EcoError {
    #[error("invalid user id: {0}")]
    InvalidUserId(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("action not found: {0}")]
    ActionNotFound(u32),

    #[error("action {0} is not pending for this user")]
    ActionNotPending(u32),

    #[error("action description must not be empty")]
    EmptyDescription,

    #[error("message must not be empty")]
    EmptyMessage,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EcoError>;
