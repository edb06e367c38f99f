/// Convenience result type used across gdpreel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid user-provided data (dataset, visuals, reel document).
    #[error("validation error: {0}")]
    Validation(String),

    /// A timeline step that is illegal for the current scene state.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Errors while validating or sampling keyframes.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating reel state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when loading or parsing configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Timeline`] value.
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`ReelError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
