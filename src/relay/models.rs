use crate::foundation::core::ResolutionTier;

/// Model offered when the caller expresses no preference.
pub const DEFAULT_MODEL_ID: &str = "gemini-3-pro-image-preview";

/// One entry of the usable-model catalog.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ModelInfo {
    /// Service-side model identifier.
    pub id: String,
    /// Human-readable name for pickers.
    pub display_name: String,
}

/// The image-capable models this application exposes. Kept as a fixed list
/// rather than a live listing call: the service catalog is full of
/// text-only models that would break generation if picked.
pub fn default_catalog() -> Vec<ModelInfo> {
    vec![ModelInfo {
        id: DEFAULT_MODEL_ID.to_string(),
        display_name: "Gemini 3 Pro Image (Preview)".to_string(),
    }]
}

/// Resolution actually requested for a model.
///
/// Flash-class models reject 4K output; the request is downgraded to 2K
/// instead of failing.
pub fn effective_resolution(model_id: &str, requested: ResolutionTier) -> ResolutionTier {
    if model_id.contains("flash") && requested == ResolutionTier::FourK {
        tracing::warn!(model_id, "downgrading 4K to 2K for flash model");
        return ResolutionTier::TwoK;
    }
    requested
}

#[cfg(test)]
#[path = "../../tests/unit/relay/models.rs"]
mod tests;
