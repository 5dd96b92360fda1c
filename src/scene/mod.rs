//! Scene object model: typed objects on a fixed-size workspace backdrop.

pub(crate) mod marker;
pub(crate) mod model;
pub(crate) mod object;

pub use marker::{
    DEFAULT_FOV_ANGLE_DEG, DEFAULT_FOV_LENGTH, FovData, FovParams, MarkerGeometry, MarkerStyle,
    fov_data,
};
pub use model::{BASE_TAG_OUTLINE, Scene, WORKSPACE_EXTENT, bounding_box_of};
pub use object::{ObjectKind, OutlineStyle, Placement, SceneObject, ShapeKind};
