/// Convenience alias used across the crate.
pub type MaquetteResult<T> = Result<T, MaquetteError>;

/// Crate-wide error type.
///
/// User-input failures (`EmptyScene`, `EmptyBase`) abort a generation attempt
/// with the scene untouched and are never retried. Capture failures propagate
/// only after scene appearance has been restored. History underflow/overflow
/// are not errors at all; undo/redo report them as `Ok(false)`.
#[derive(thiserror::Error, Debug)]
pub enum MaquetteError {
    /// Invalid argument or scene state.
    #[error("validation error: {0}")]
    Validation(String),

    /// The workspace holds no objects at all.
    #[error("canvas is empty: place something on the workspace first")]
    EmptyScene,

    /// Classification produced an empty content set, so there is nothing to
    /// use as the base image.
    #[error("no base image found: add an image or tag one as base")]
    EmptyBase,

    /// Rasterization failed mid-pipeline. Scene visibility and styling have
    /// already been restored when this surfaces.
    #[error("capture error: {0}")]
    Capture(String),

    /// Persistent store failure.
    #[error("store error: {0}")]
    Store(String),

    /// Scene snapshot or payload (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Terminal failure from the generation relay.
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaquetteError {
    /// Build a [`MaquetteError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MaquetteError::Capture`].
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Build a [`MaquetteError::Store`].
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Build a [`MaquetteError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Failure modes of one generation request.
///
/// All variants are terminal for the request that produced them: the pending
/// payload is discarded and nothing is retried automatically. The distinction
/// exists so the caller can surface an actionable message.
#[derive(thiserror::Error, Debug)]
pub enum RelayError {
    /// The requested model id is unknown to the upstream service.
    #[error("model '{0}' not found")]
    ModelNotFound(String),

    /// The upstream service refused the request on safety grounds.
    #[error("request blocked by safety settings")]
    SafetyBlocked,

    /// The call exceeded the relay's fixed deadline.
    #[error("gateway timeout: upstream took too long to respond")]
    Timeout,

    /// The request never produced a usable response (connection reset, DNS,
    /// proxy failure).
    #[error("transport error: {0}")]
    Transport(String),

    /// The upstream service rejected the request (bad key, missing
    /// permissions, quota).
    #[error("upstream rejected request: {0}")]
    Upstream(String),

    /// A response arrived but could not be interpreted as an image or text
    /// result.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
