use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::{MaquetteError, MaquetteResult};
use crate::scene::object::SceneObject;

/// Default field-of-view spread in degrees.
pub const DEFAULT_FOV_ANGLE_DEG: f64 = 60.0;
/// Default view depth in workspace units.
pub const DEFAULT_FOV_LENGTH: f64 = 200.0;

/// Camera-position indicator radius.
pub(crate) const EYE_RADIUS: f64 = 14.0;
/// Inner pupil radius.
pub(crate) const PUPIL_RADIUS: f64 = 5.0;
/// Fraction of the view depth covered by the direction ray.
pub(crate) const RAY_FRACTION: f64 = 0.7;
/// Arrowhead footprint (width across the ray, height along it).
pub(crate) const ARROWHEAD_WIDTH: f64 = 16.0;
pub(crate) const ARROWHEAD_HEIGHT: f64 = 20.0;
/// White rim stroke width around the eye circle.
pub(crate) const EYE_RIM_WIDTH: f64 = 3.0;

/// Fixed styling of the marker composite, consumed by the rendering
/// capability.
///
/// The prompt assembler names the cyan circle and orange arrow by color, so
/// this palette is part of the contract, not just decoration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    /// Eye circle fill (cyan).
    pub eye_fill: Rgba8,
    /// Eye circle rim stroke.
    pub eye_rim: Rgba8,
    /// Eye rim stroke width.
    pub eye_rim_width: f64,
    /// Inner pupil fill.
    pub pupil_fill: Rgba8,
    /// Direction ray and arrowhead color (orange).
    pub ray_color: Rgba8,
    /// Direction ray stroke width.
    pub ray_width: f64,
    /// View cone fill (translucent cyan).
    pub cone_fill: Rgba8,
    /// View cone outline stroke.
    pub cone_stroke: Rgba8,
    /// View cone outline width.
    pub cone_stroke_width: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            eye_fill: Rgba8::rgb(0x00, 0xBC, 0xD4),
            eye_rim: Rgba8::rgb(0xFF, 0xFF, 0xFF),
            eye_rim_width: EYE_RIM_WIDTH,
            pupil_fill: Rgba8::rgb(0x0D, 0x47, 0xA1),
            ray_color: Rgba8::rgb(0xFF, 0x57, 0x22),
            ray_width: 3.0,
            cone_fill: Rgba8::rgba(0x00, 0xBC, 0xD4, 64),
            cone_stroke: Rgba8::rgb(0x00, 0xBC, 0xD4),
            cone_stroke_width: 2.0,
        }
    }
}

/// Parameters of the field-of-view marker.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FovParams {
    /// Field-of-view spread in degrees, `(0, 180)`.
    pub angle_deg: f64,
    /// View depth in workspace units, `> 0`.
    pub length: f64,
}

impl Default for FovParams {
    fn default() -> Self {
        Self {
            angle_deg: DEFAULT_FOV_ANGLE_DEG,
            length: DEFAULT_FOV_LENGTH,
        }
    }
}

impl FovParams {
    /// Create validated parameters.
    pub fn new(angle_deg: f64, length: f64) -> MaquetteResult<Self> {
        let params = Self { angle_deg, length };
        params.validate()?;
        Ok(params)
    }

    /// Check the invariants documented on the fields.
    pub fn validate(&self) -> MaquetteResult<()> {
        if !self.angle_deg.is_finite() || self.angle_deg <= 0.0 || self.angle_deg >= 180.0 {
            return Err(MaquetteError::validation(
                "fov angle must be in (0, 180) degrees",
            ));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(MaquetteError::validation("fov length must be > 0"));
        }
        Ok(())
    }
}

/// Derived composite geometry of the marker, in marker-local coordinates.
///
/// The camera eye sits at the origin and the view direction is `+x`. Placing
/// the marker applies the object's scale, rotation (about the eye, not the
/// composite center), and translation on top of these points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerGeometry {
    /// Camera-position indicator radius (circle centered at the origin).
    pub eye_radius: f64,
    /// Inner pupil radius (circle centered at the origin).
    pub pupil_radius: f64,
    /// Direction ray from the eye, terminating where the arrowhead sits.
    pub ray_end: Point,
    /// Arrowhead triangle pointing along `+x`.
    pub arrowhead: [Point; 3],
    /// View cone wedge: eye, far-left corner, far-right corner.
    pub cone: [Point; 3],
}

impl MarkerGeometry {
    /// Build the composite from marker parameters.
    ///
    /// The wedge's far corners land at `(length, ±length·tan(angle/2))`; the
    /// ray covers 70% of the view depth.
    pub fn build(params: &FovParams) -> Self {
        let half_angle = (params.angle_deg / 2.0).to_radians();
        let spread = half_angle.tan() * params.length;

        let ray_end = Point::new(params.length * RAY_FRACTION, 0.0);
        let half_w = ARROWHEAD_WIDTH / 2.0;
        let half_h = ARROWHEAD_HEIGHT / 2.0;

        Self {
            eye_radius: EYE_RADIUS,
            pupil_radius: PUPIL_RADIUS,
            ray_end,
            arrowhead: [
                Point::new(ray_end.x + half_h, 0.0),
                Point::new(ray_end.x - half_h, -half_w),
                Point::new(ray_end.x - half_h, half_w),
            ],
            cone: [
                Point::new(0.0, 0.0),
                Point::new(params.length, -spread),
                Point::new(params.length, spread),
            ],
        }
    }

    /// Tight local-space bounds of every composite part.
    pub fn bounds(&self) -> Rect {
        let rim = self.eye_radius + EYE_RIM_WIDTH / 2.0;
        let mut rect = Rect::new(-rim, -rim, rim, rim);
        for p in self.arrowhead.iter().chain(self.cone.iter()) {
            rect = rect.union_pt(*p);
        }
        rect
    }
}

/// Structured viewing data extracted from a placed marker.
///
/// This is what the prompt assembler turns into the perspective instruction
/// block.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FovData {
    /// Camera eye position in workspace coordinates.
    pub position: Point,
    /// Viewing direction in degrees (the marker's placed rotation; 0 = +x).
    pub direction_deg: f64,
    /// Field-of-view spread in degrees.
    pub angle_deg: f64,
    /// View depth in workspace units.
    pub length: f64,
}

/// Extract viewing data from a placed marker object.
///
/// Returns `None` for any non-marker object.
pub fn fov_data(object: &SceneObject) -> Option<FovData> {
    let params = object.fov_params()?;
    Some(FovData {
        position: object.placement.position,
        direction_deg: object.placement.rotation_deg,
        angle_deg: params.angle_deg,
        length: params.length,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/marker.rs"]
mod tests;
