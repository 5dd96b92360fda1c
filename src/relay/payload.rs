use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::foundation::core::{AspectRatio, ResolutionTier};
use crate::foundation::error::MaquetteResult;
use crate::relay::models::effective_resolution;
use crate::render::RasterImage;

/// JPEG quality for the clean and marked captures.
pub const JPEG_QUALITY_CONTEXT: u8 = 95;
/// JPEG quality for reference captures.
pub const JPEG_QUALITY_REFERENCE: u8 = 90;

/// An encoded image ready for wire embedding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    /// MIME type of `data`.
    pub mime_type: String,
    /// Encoded bytes.
    pub data: Vec<u8>,
}

impl EncodedImage {
    /// JPEG-encode a capture at the given quality.
    pub fn jpeg_from_raster(raster: &RasterImage, quality: u8) -> MaquetteResult<Self> {
        Ok(Self {
            mime_type: "image/jpeg".to_string(),
            data: raster.encode_jpeg(quality)?,
        })
    }

    /// Wrap already-encoded bytes (a manually supplied reference image, a
    /// relay result).
    pub fn from_encoded(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Standard base64 of the encoded bytes, as embedded in request bodies.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.data)
    }
}

/// Everything one generation request carries.
///
/// Transient by design: built by `Session::prepare_generation`, discarded
/// when the request completes or the user cancels before dispatch.
#[derive(Clone, Debug)]
pub struct GenerationPayload {
    /// Assembled instruction text.
    pub prompt: String,
    /// Clean base capture (image 1).
    pub clean: EncodedImage,
    /// Marked instruction capture (image 2).
    pub marked: EncodedImage,
    /// Style references (images 3..N), in classification order.
    pub references: Vec<EncodedImage>,
    /// Target model id.
    pub model_id: String,
    /// Requested output aspect ratio.
    pub aspect_ratio: AspectRatio,
    /// Requested output resolution tier.
    pub resolution: ResolutionTier,
}

impl GenerationPayload {
    /// Total number of attached images (clean + marked + references).
    pub fn image_count(&self) -> usize {
        2 + self.references.len()
    }

    /// Build the upstream request body: prompt part first, then the images
    /// in role order, plus the image-output generation config.
    pub fn to_request_body(&self) -> serde_json::Value {
        let mut parts = vec![serde_json::json!({ "text": self.prompt })];
        for image in [&self.clean, &self.marked]
            .into_iter()
            .chain(self.references.iter())
        {
            parts.push(serde_json::json!({
                "inline_data": {
                    "mime_type": image.mime_type,
                    "data": image.to_base64(),
                }
            }));
        }

        let resolution = effective_resolution(&self.model_id, self.resolution);
        serde_json::json!({
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "responseModalities": ["IMAGE"],
                "imageConfig": {
                    "aspect_ratio": self.aspect_ratio.tag(),
                    "image_size": resolution.tag(),
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/relay/payload.rs"]
mod tests;
