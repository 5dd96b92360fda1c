//! Role classification and the multi-layer capture pass.

pub(crate) mod classify;
pub(crate) mod pipeline;

pub use classify::{Classification, classify};
pub use pipeline::{
    CONTEXT_TARGET_SIZE, CaptureOpts, CapturedLayers, REFERENCE_MAX_UPSCALE,
    REFERENCE_TARGET_SIZE, capture_layers,
};
