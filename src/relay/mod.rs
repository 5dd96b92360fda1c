//! Consumed generation relay: one outbound request per prepared payload.

pub(crate) mod models;
pub(crate) mod payload;

pub use models::{DEFAULT_MODEL_ID, ModelInfo, default_catalog, effective_resolution};
pub use payload::{
    EncodedImage, GenerationPayload, JPEG_QUALITY_CONTEXT, JPEG_QUALITY_REFERENCE,
};

use std::time::Duration;

use crate::foundation::error::RelayError;

/// Deadline on the relay (proxy) path; the proxy's own platform limit sits
/// just above it.
pub const RELAY_TIMEOUT: Duration = Duration::from_secs(9);
/// Deadline on the direct path to the upstream service.
pub const DIRECT_TIMEOUT: Duration = Duration::from_secs(60);

/// Successful result of one generation request.
#[derive(Clone, Debug)]
pub enum GenerationOutcome {
    /// The service produced an image.
    Image(EncodedImage),
    /// The service answered with text only.
    Text(String),
}

/// The external service that turns a payload into a generated image.
///
/// One call per prepared payload; there is no mid-flight cancellation, so
/// implementations convert a stall into [`RelayError::Timeout`] after
/// [`RELAY_TIMEOUT`] / [`DIRECT_TIMEOUT`]. Every error variant is terminal
/// for the request: the caller discards the payload and never retries
/// automatically.
pub trait GenerationRelay {
    /// Submit a payload and block until the service answers or the deadline
    /// passes.
    fn submit(&mut self, payload: &GenerationPayload) -> Result<GenerationOutcome, RelayError>;
}
