/// Convenience result type used across the yearbook crate.
pub type YearbookResult<T> = Result<T, YearbookError>;

/// Top-level error taxonomy for loading content and configuring the viewer.
///
/// Navigation itself never fails: out-of-range moves are no-ops or typed rejections.
#[derive(thiserror::Error, Debug)]
pub enum YearbookError {
    /// Structurally valid data that breaks a content or range rule.
    #[error("validation error: {0}")]
    Validation(String),

    /// Problems building a story from the static yearbook record.
    #[error("content error: {0}")]
    Content(String),

    /// Invalid viewer configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl YearbookError {
    /// Build a [`YearbookError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`YearbookError::Content`] value.
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Build a [`YearbookError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`YearbookError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for YearbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
