use crate::foundation::core::{ObjectId, Point, Rect, Rgba8, Size};
use crate::foundation::error::{MaquetteError, MaquetteResult};
use crate::scene::marker::{FovParams, MarkerGeometry};
use crate::scene::object::{ObjectKind, OutlineStyle, Placement, SceneObject};

/// Side length of the square workspace backdrop, in workspace units.
pub const WORKSPACE_EXTENT: f64 = 4096.0;

/// Largest side a placed image may occupy; bigger images are scaled down
/// uniformly on add.
const MAX_IMAGE_SIDE: f64 = 4096.0;

/// Offset applied when duplicating an object.
const DUPLICATE_OFFSET: f64 = 20.0;

/// Outline applied to an image while it is tagged as base content. This is a
/// viewport affordance only: the capture pipeline strips it before the clean
/// render.
pub const BASE_TAG_OUTLINE: OutlineStyle = OutlineStyle {
    color: Rgba8::rgb(0x4C, 0xAF, 0x50),
    width: 4.0,
};

/// The scene: an ordered set of objects over the workspace backdrop.
///
/// Object order is z-order (index 0 draws first); the workspace is pinned to
/// index 0. The scene is plain data plus invariant enforcement - change
/// notification and history recording live in
/// [`Session`](crate::session::Session).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    objects: Vec<SceneObject>,
    next_id: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene holding only the synthesized workspace.
    pub fn new() -> Self {
        let mut scene = Self {
            objects: Vec::new(),
            next_id: 1,
        };
        scene.ensure_workspace();
        scene
    }

    /// Deserialize a scene snapshot and re-establish workspace invariants.
    ///
    /// This is the restore half of undo/redo and the load half of
    /// persistence: a snapshot missing its workspace gets one synthesized, a
    /// present one is forced visible and back to the bottom of the z-order.
    pub fn from_json(json: &str) -> MaquetteResult<Self> {
        let mut scene: Scene =
            serde_json::from_str(json).map_err(|e| MaquetteError::serde(e.to_string()))?;
        scene.ensure_workspace();
        Ok(scene)
    }

    /// Serialize the full scene for snapshots and persistence.
    pub fn to_json(&self) -> MaquetteResult<String> {
        serde_json::to_string(self).map_err(|e| MaquetteError::serde(e.to_string()))
    }

    /// Re-establish the single-workspace invariant: exactly one backdrop,
    /// visible, untagged, at the bottom of the z-order.
    pub(crate) fn ensure_workspace(&mut self) {
        match self.objects.iter().position(SceneObject::is_workspace) {
            None => {
                let mut workspace = SceneObject::workspace(WORKSPACE_EXTENT);
                workspace.id = self.allocate_id();
                self.objects.insert(0, workspace);
            }
            Some(index) => {
                let mut workspace = self.objects.remove(index);
                workspace.visible = true;
                workspace.outline = None;
                workspace.base_tagged = false;
                // A malformed snapshot may carry stray extra backdrops.
                self.objects.retain(|o| !o.is_workspace());
                self.objects.insert(0, workspace);
            }
        }
        if self.next_id <= self.max_id() {
            self.next_id = self.max_id() + 1;
        }
    }

    fn max_id(&self) -> u64 {
        self.objects.iter().map(|o| o.id.0).max().unwrap_or(0)
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    /// All objects in z-order, workspace first.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// All objects except the workspace backdrop, in z-order.
    pub fn non_workspace_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| !o.is_workspace())
    }

    /// Look up an object by id.
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub(crate) fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// The workspace backdrop.
    pub fn workspace(&self) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.is_workspace())
    }

    /// The field-of-view marker, if one is placed.
    pub fn fov_marker(&self) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.is_fov_marker())
    }

    /// Add an object on top of the z-order and return its assigned id.
    ///
    /// Enforced here: a second workspace is rejected; placing a marker evicts
    /// any existing marker; images over 4096 on a side are scaled down to
    /// fit; the object center is clamped to the workspace.
    pub fn add_object(&mut self, mut object: SceneObject) -> MaquetteResult<ObjectId> {
        match &object.kind {
            ObjectKind::Workspace => {
                return Err(MaquetteError::validation(
                    "the workspace backdrop is synthesized and cannot be added",
                ));
            }
            ObjectKind::Marker(_) => {
                self.objects.retain(|o| !o.is_fov_marker());
            }
            ObjectKind::Image { .. } => {
                let side = object.size.width.max(object.size.height);
                if side > MAX_IMAGE_SIDE {
                    let factor = MAX_IMAGE_SIDE / side;
                    object.placement.scale = object.placement.scale * factor;
                }
            }
            _ => {}
        }
        object.placement.position = self.clamp_to_workspace(object.placement.position);
        object.id = self.allocate_id();
        let id = object.id;
        self.objects.push(object);
        Ok(id)
    }

    /// Remove an object. Returns whether anything was removed; removing the
    /// workspace is a rejected no-op.
    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        let Some(index) = self.objects.iter().position(|o| o.id == id) else {
            return false;
        };
        if self.objects[index].is_workspace() {
            return false;
        }
        self.objects.remove(index);
        true
    }

    /// Remove everything except the workspace backdrop.
    pub fn clear_content(&mut self) {
        self.objects.retain(SceneObject::is_workspace);
    }

    /// Tag or untag an image as base content, applying or removing the
    /// visual indicator outline.
    pub fn set_base_tag(&mut self, id: ObjectId, tagged: bool) -> MaquetteResult<()> {
        let object = self
            .object_mut(id)
            .ok_or_else(|| MaquetteError::validation("no such object"))?;
        if !object.is_image() {
            return Err(MaquetteError::validation(
                "only images can be tagged as base content",
            ));
        }
        object.base_tagged = tagged;
        object.outline = tagged.then_some(BASE_TAG_OUTLINE);
        Ok(())
    }

    /// Move, rotate, or scale an object. The position is clamped to the
    /// workspace; the workspace itself cannot be repositioned.
    pub fn set_placement(&mut self, id: ObjectId, placement: Placement) -> MaquetteResult<()> {
        let clamped = self.clamp_to_workspace(placement.position);
        let object = self
            .object_mut(id)
            .ok_or_else(|| MaquetteError::validation("no such object"))?;
        if object.is_workspace() {
            return Err(MaquetteError::validation("the workspace cannot be moved"));
        }
        object.placement = Placement {
            position: clamped,
            ..placement
        };
        Ok(())
    }

    /// Show or hide an object.
    pub fn set_visibility(&mut self, id: ObjectId, visible: bool) -> MaquetteResult<()> {
        let object = self
            .object_mut(id)
            .ok_or_else(|| MaquetteError::validation("no such object"))?;
        object.visible = visible;
        Ok(())
    }

    /// Clone an object at a fixed offset and return the copy's id. The
    /// workspace and the marker (unique by invariant) are not duplicable.
    pub fn duplicate(&mut self, id: ObjectId) -> MaquetteResult<ObjectId> {
        let source = self
            .object(id)
            .ok_or_else(|| MaquetteError::validation("no such object"))?;
        if source.is_workspace() || source.is_fov_marker() {
            return Err(MaquetteError::validation("this object cannot be duplicated"));
        }
        let mut copy = source.clone();
        copy.placement.position += kurbo::Vec2::new(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
        self.add_object(copy)
    }

    /// Rebuild the marker from new parameters at its current position and
    /// rotation. Returns `false` when no marker is placed.
    pub fn set_fov_parameters(&mut self, params: FovParams) -> MaquetteResult<bool> {
        params.validate()?;
        let Some(marker) = self.objects.iter_mut().find(|o| o.is_fov_marker()) else {
            return Ok(false);
        };
        marker.kind = ObjectKind::Marker(params);
        marker.size = MarkerGeometry::build(&params).bounds().size();
        Ok(true)
    }

    // --- z-order ---

    fn position_of(&self, id: ObjectId) -> MaquetteResult<usize> {
        self.objects
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| MaquetteError::validation("no such object"))
    }

    fn workspace_to_bottom(&mut self) {
        if let Some(index) = self.objects.iter().position(SceneObject::is_workspace)
            && index != 0
        {
            let workspace = self.objects.remove(index);
            self.objects.insert(0, workspace);
        }
    }

    /// Move an object one step up the z-order.
    pub fn bring_forward(&mut self, id: ObjectId) -> MaquetteResult<()> {
        let index = self.position_of(id)?;
        if index + 1 < self.objects.len() {
            self.objects.swap(index, index + 1);
        }
        self.workspace_to_bottom();
        Ok(())
    }

    /// Move an object one step down the z-order (never below the workspace).
    pub fn send_backwards(&mut self, id: ObjectId) -> MaquetteResult<()> {
        let index = self.position_of(id)?;
        if index > 1 {
            self.objects.swap(index, index - 1);
        }
        self.workspace_to_bottom();
        Ok(())
    }

    /// Move an object to the top of the z-order.
    pub fn bring_to_front(&mut self, id: ObjectId) -> MaquetteResult<()> {
        let index = self.position_of(id)?;
        let object = self.objects.remove(index);
        self.objects.push(object);
        self.workspace_to_bottom();
        Ok(())
    }

    /// Move an object to the bottom of the z-order (directly above the
    /// workspace).
    pub fn send_to_back(&mut self, id: ObjectId) -> MaquetteResult<()> {
        let index = self.position_of(id)?;
        let object = self.objects.remove(index);
        self.objects.insert(0, object);
        self.workspace_to_bottom();
        Ok(())
    }

    /// Clamp a point into the workspace extent.
    pub fn clamp_to_workspace(&self, point: Point) -> Point {
        let center = self
            .workspace()
            .map(|w| w.placement.position)
            .unwrap_or(Point::ZERO);
        let limit = WORKSPACE_EXTENT / 2.0;
        Point::new(
            point.x.clamp(center.x - limit, center.x + limit),
            point.y.clamp(center.y - limit, center.y + limit),
        )
    }

    /// Workspace size (always [`WORKSPACE_EXTENT`] square).
    pub fn workspace_size(&self) -> Size {
        Size::new(WORKSPACE_EXTENT, WORKSPACE_EXTENT)
    }
}

/// Smallest axis-aligned rectangle covering the rendered bounding rectangles
/// of the given objects, in workspace coordinates.
///
/// An empty input is a contract violation surfaced as a validation error -
/// callers decide what "nothing" means before asking for its bounds.
pub fn bounding_box_of<'a, I>(objects: I) -> MaquetteResult<Rect>
where
    I: IntoIterator<Item = &'a SceneObject>,
{
    let mut out: Option<Rect> = None;
    for object in objects {
        let rect = object.bounding_rect();
        out = Some(match out {
            Some(acc) => acc.union(rect),
            None => rect,
        });
    }
    out.ok_or_else(|| MaquetteError::validation("bounding box of zero objects is undefined"))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
