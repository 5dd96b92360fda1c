use crate::foundation::core::Rect;
use crate::foundation::error::{MaquetteError, MaquetteResult};
use crate::scene::Scene;

/// A rasterized capture as straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Wrap pixel data, checking the byte length against the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> MaquetteResult<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(MaquetteError::validation(format!(
                "raster data length {} does not match {}x{} RGBA8",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Encode as JPEG at the given quality (1-100).
    ///
    /// Alpha is dropped; captures render over the opaque workspace backdrop,
    /// so there is nothing meaningful in it.
    pub fn encode_jpeg(&self, quality: u8) -> MaquetteResult<Vec<u8>> {
        let rgb: Vec<u8> = self
            .data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        let mut out = Vec::new();
        let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, quality);
        encoder
            .encode(&rgb, self.width, self.height, image::ExtendedColorType::Rgb8)
            .map_err(|e| MaquetteError::capture(format!("jpeg encode failed: {e}")))?;
        Ok(out)
    }
}

/// The external rendering capability the capture pipeline drives.
///
/// Implementations draw the scene's *visible* objects; the pipeline toggles
/// [`SceneObject::visible`](crate::SceneObject) between calls and always
/// restores it before returning. Only one capture pass runs at a time, so
/// implementations may reuse a single surface.
pub trait RenderSurface {
    /// Redraw the scene so subsequent rasterization observes current object
    /// visibility and styling.
    fn render(&mut self, scene: &Scene) -> MaquetteResult<()>;

    /// Read back `region` (workspace coordinates) scaled by `scale` into a
    /// pixel buffer of roughly `region.size() * scale`.
    fn rasterize(&mut self, scene: &Scene, region: Rect, scale: f64) -> MaquetteResult<RasterImage>;
}
