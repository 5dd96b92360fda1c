use crate::foundation::core::{ObjectId, Point, Rect, Rgba8, Size, Vec2};
use crate::foundation::error::{MaquetteError, MaquetteResult};
use crate::scene::marker::{FovParams, MarkerGeometry};

/// Outline stroke styling on an object (shape borders, the base-tag
/// indicator on images).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutlineStyle {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in workspace units.
    pub width: f64,
}

/// Where and how an object sits on the workspace.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Anchor point in workspace coordinates: the object center, except for
    /// markers, which anchor (and rotate) at the camera eye.
    pub position: Point,
    /// Rotation in degrees about the anchor.
    pub rotation_deg: f64,
    /// Per-axis scale factors.
    pub scale: Vec2,
}

impl Placement {
    /// Unrotated, unscaled placement at `position`.
    pub fn at(position: Point) -> Self {
        Self {
            position,
            rotation_deg: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::at(Point::ZERO)
    }
}

/// Primitive shape kinds drawable as annotations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ShapeKind {
    /// Axis-aligned rectangle outline.
    Rect,
    /// Ellipse outline.
    Ellipse,
}

/// Typed payload of a scene object.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ObjectKind {
    /// A placed raster image. `source` is an opaque asset reference resolved
    /// by the rendering capability (data ref, gallery id, file key).
    Image {
        /// Asset reference.
        source: String,
    },
    /// An annotation shape (outline only, transparent fill).
    Shape {
        /// Which primitive.
        shape: ShapeKind,
    },
    /// An annotation text label.
    Text {
        /// Label content.
        content: String,
        /// Font size in workspace units.
        font_size: f64,
        /// Fill color.
        color: Rgba8,
    },
    /// A completed free-hand stroke. Points are stored relative to the object
    /// center.
    Stroke {
        /// Polyline points, local to the object center.
        points: Vec<Point>,
        /// Stroke color.
        color: Rgba8,
        /// Stroke width in workspace units.
        width: f64,
    },
    /// The field-of-view camera marker.
    Marker(FovParams),
    /// The workspace backdrop. Synthesized by the scene, never user-created.
    Workspace,
}

/// One entity placed on the workspace.
///
/// Construct through the typed constructors ([`SceneObject::image`] and
/// friends) and hand to [`Scene::add_object`](crate::Scene::add_object),
/// which assigns the id and enforces scene invariants.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneObject {
    pub(crate) id: ObjectId,
    /// Typed payload.
    pub kind: ObjectKind,
    /// Position, rotation, and scale on the workspace.
    pub placement: Placement,
    /// Intrinsic (unscaled) size.
    pub size: Size,
    /// Whether the object is drawn. Toggled transiently during capture.
    pub visible: bool,
    /// Optional outline stroke (shape borders, base-tag indicator).
    pub outline: Option<OutlineStyle>,
    pub(crate) base_tagged: bool,
}

fn validated_size(size: Size) -> MaquetteResult<Size> {
    if !size.width.is_finite() || !size.height.is_finite() || size.width <= 0.0 || size.height <= 0.0
    {
        return Err(MaquetteError::validation(
            "object size must be positive and finite",
        ));
    }
    Ok(size)
}

impl SceneObject {
    fn with_kind(kind: ObjectKind, placement: Placement, size: Size) -> Self {
        Self {
            id: ObjectId(0), // assigned by Scene::add_object
            kind,
            placement,
            size,
            visible: true,
            outline: None,
            base_tagged: false,
        }
    }

    /// A placed image.
    pub fn image(
        source: impl Into<String>,
        size: Size,
        placement: Placement,
    ) -> MaquetteResult<Self> {
        Ok(Self::with_kind(
            ObjectKind::Image {
                source: source.into(),
            },
            placement,
            validated_size(size)?,
        ))
    }

    /// An annotation shape with an outline stroke.
    pub fn shape(
        shape: ShapeKind,
        size: Size,
        placement: Placement,
        outline: OutlineStyle,
    ) -> MaquetteResult<Self> {
        let mut object = Self::with_kind(ObjectKind::Shape { shape }, placement, validated_size(size)?);
        object.outline = Some(outline);
        Ok(object)
    }

    /// An annotation text label. `size` is the laid-out extent as measured by
    /// the rendering capability.
    pub fn text(
        content: impl Into<String>,
        font_size: f64,
        color: Rgba8,
        size: Size,
        placement: Placement,
    ) -> MaquetteResult<Self> {
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(MaquetteError::validation("font size must be > 0"));
        }
        Ok(Self::with_kind(
            ObjectKind::Text {
                content: content.into(),
                font_size,
                color,
            },
            placement,
            validated_size(size)?,
        ))
    }

    /// A completed free-hand stroke from workspace-space points.
    ///
    /// The object centers itself on the points' bounding box and stores them
    /// in local coordinates.
    pub fn stroke(points: &[Point], color: Rgba8, width: f64) -> MaquetteResult<Self> {
        if points.len() < 2 {
            return Err(MaquetteError::validation(
                "a stroke needs at least two points",
            ));
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(MaquetteError::validation("stroke width must be > 0"));
        }
        let mut bounds = Rect::from_points(points[0], points[0]);
        for p in &points[1..] {
            bounds = bounds.union_pt(*p);
        }
        // Degenerate (straight axis-aligned) strokes still occupy their width.
        let size = Size::new(bounds.width().max(width), bounds.height().max(width));
        let center = bounds.center();
        let local: Vec<Point> = points
            .iter()
            .map(|p| Point::new(p.x - center.x, p.y - center.y))
            .collect();
        Ok(Self::with_kind(
            ObjectKind::Stroke {
                points: local,
                color,
                width,
            },
            Placement::at(center),
            size,
        ))
    }

    /// The field-of-view marker. Its size derives from the composite
    /// geometry; [`Scene::add_object`](crate::Scene::add_object) evicts any
    /// existing marker when this is placed.
    pub fn fov_marker(params: FovParams, placement: Placement) -> MaquetteResult<Self> {
        params.validate()?;
        let size = MarkerGeometry::build(&params).bounds().size();
        Ok(Self::with_kind(ObjectKind::Marker(params), placement, size))
    }

    pub(crate) fn workspace(extent: f64) -> Self {
        Self::with_kind(
            ObjectKind::Workspace,
            Placement::default(),
            Size::new(extent, extent),
        )
    }

    /// Scene-assigned identifier. Zero until the object is added to a scene.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Whether this is a placed image.
    pub fn is_image(&self) -> bool {
        matches!(self.kind, ObjectKind::Image { .. })
    }

    /// Whether this is the workspace backdrop.
    pub fn is_workspace(&self) -> bool {
        matches!(self.kind, ObjectKind::Workspace)
    }

    /// Whether this is the field-of-view marker.
    pub fn is_fov_marker(&self) -> bool {
        matches!(self.kind, ObjectKind::Marker(_))
    }

    /// Whether this image is tagged as base content.
    pub fn is_base_image(&self) -> bool {
        self.base_tagged
    }

    /// Marker parameters, for marker objects.
    pub fn fov_params(&self) -> Option<&FovParams> {
        match &self.kind {
            ObjectKind::Marker(params) => Some(params),
            _ => None,
        }
    }

    /// Rendered area (intrinsic size times scale), used to rank untagged
    /// images when picking the implicit base.
    pub fn rendered_area(&self) -> f64 {
        (self.size.width * self.placement.scale.x).abs()
            * (self.size.height * self.placement.scale.y).abs()
    }

    /// Axis-aligned bounding rectangle of the rendered object in workspace
    /// coordinates, accounting for scale and rotation.
    pub fn bounding_rect(&self) -> Rect {
        let local = match &self.kind {
            // Markers anchor at the eye, not the composite center.
            ObjectKind::Marker(params) => MarkerGeometry::build(params).bounds(),
            _ => {
                let half_w = self.size.width / 2.0;
                let half_h = self.size.height / 2.0;
                Rect::new(-half_w, -half_h, half_w, half_h)
            }
        };

        let theta = self.placement.rotation_deg.to_radians();
        let (sin, cos) = theta.sin_cos();
        let sx = self.placement.scale.x;
        let sy = self.placement.scale.y;
        let origin = self.placement.position;

        let mut out: Option<Rect> = None;
        for (cx, cy) in [
            (local.x0, local.y0),
            (local.x1, local.y0),
            (local.x1, local.y1),
            (local.x0, local.y1),
        ] {
            let (x, y) = (cx * sx, cy * sy);
            let p = Point::new(
                origin.x + x * cos - y * sin,
                origin.y + x * sin + y * cos,
            );
            out = Some(match out {
                Some(rect) => rect.union_pt(p),
                None => Rect::from_points(p, p),
            });
        }
        out.unwrap_or(Rect::ZERO)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/object.rs"]
mod tests;
