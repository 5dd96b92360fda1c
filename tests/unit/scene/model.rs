use super::*;
use crate::foundation::core::Vec2;
use crate::scene::object::ShapeKind;

fn image(scene: &mut Scene, w: f64, h: f64, at: Point) -> ObjectId {
    scene
        .add_object(SceneObject::image("img", Size::new(w, h), Placement::at(at)).unwrap())
        .unwrap()
}

fn shape(scene: &mut Scene, at: Point) -> ObjectId {
    let outline = OutlineStyle {
        color: Rgba8::rgb(0xFF, 0x4B, 0x4B),
        width: 5.0,
    };
    scene
        .add_object(
            SceneObject::shape(ShapeKind::Rect, Size::new(40.0, 40.0), Placement::at(at), outline)
                .unwrap(),
        )
        .unwrap()
}

#[test]
fn new_scene_synthesizes_the_workspace() {
    let scene = Scene::new();
    let workspace = scene.workspace().unwrap();
    assert!(workspace.is_workspace());
    assert_eq!(workspace.size, Size::new(WORKSPACE_EXTENT, WORKSPACE_EXTENT));
    assert_eq!(scene.objects()[0].id(), workspace.id());
    assert_eq!(scene.non_workspace_objects().count(), 0);
}

#[test]
fn workspace_cannot_be_removed_or_readded() {
    let mut scene = Scene::new();
    let ws_id = scene.workspace().unwrap().id();
    assert!(!scene.remove_object(ws_id));
    assert!(scene.workspace().is_some());

    let second = SceneObject::workspace(WORKSPACE_EXTENT);
    assert!(scene.add_object(second).is_err());
}

#[test]
fn restore_reestablishes_workspace_invariants() {
    let mut scene = Scene::new();
    image(&mut scene, 100.0, 100.0, Point::ZERO);

    // Simulate a snapshot in which the workspace was left dirty.
    let ws_id = scene.workspace().unwrap().id();
    scene.object_mut(ws_id).unwrap().visible = false;
    let json = scene.to_json().unwrap();

    let restored = Scene::from_json(&json).unwrap();
    let workspace = restored.workspace().unwrap();
    assert!(workspace.visible);
    assert!(restored.objects()[0].is_workspace());
}

#[test]
fn restore_without_workspace_synthesizes_one() {
    let json = r#"{"objects":[],"next_id":1}"#;
    let restored = Scene::from_json(json).unwrap();
    assert!(restored.workspace().is_some());
}

#[test]
fn bounding_box_of_single_object_is_its_rendered_rect() {
    let mut scene = Scene::new();
    let id = image(&mut scene, 800.0, 600.0, Point::new(10.0, -20.0));
    let object = scene.object(id).unwrap();
    let bbox = bounding_box_of([object]).unwrap();
    assert_eq!(bbox, object.bounding_rect());
}

#[test]
fn bounding_box_of_nothing_is_an_error() {
    let none: [&SceneObject; 0] = [];
    assert!(bounding_box_of(none).is_err());
}

#[test]
fn bounding_box_unions_all_objects() {
    let mut scene = Scene::new();
    let a = image(&mut scene, 100.0, 100.0, Point::new(-200.0, 0.0));
    let b = image(&mut scene, 100.0, 100.0, Point::new(200.0, 0.0));
    let objects: Vec<_> = [a, b].iter().map(|id| scene.object(*id).unwrap()).collect();
    let bbox = bounding_box_of(objects).unwrap();
    assert_eq!(bbox, Rect::new(-250.0, -50.0, 250.0, 50.0));
}

#[test]
fn base_tag_applies_and_strips_the_indicator() {
    let mut scene = Scene::new();
    let id = image(&mut scene, 100.0, 100.0, Point::ZERO);
    scene.set_base_tag(id, true).unwrap();
    let object = scene.object(id).unwrap();
    assert!(object.is_base_image());
    assert_eq!(object.outline, Some(BASE_TAG_OUTLINE));

    scene.set_base_tag(id, false).unwrap();
    let object = scene.object(id).unwrap();
    assert!(!object.is_base_image());
    assert_eq!(object.outline, None);
}

#[test]
fn base_tag_rejects_non_images() {
    let mut scene = Scene::new();
    let id = shape(&mut scene, Point::ZERO);
    assert!(scene.set_base_tag(id, true).is_err());
}

#[test]
fn placement_is_clamped_to_the_workspace() {
    let mut scene = Scene::new();
    let id = image(&mut scene, 100.0, 100.0, Point::ZERO);
    scene
        .set_placement(id, Placement::at(Point::new(99_999.0, -99_999.0)))
        .unwrap();
    let limit = WORKSPACE_EXTENT / 2.0;
    assert_eq!(
        scene.object(id).unwrap().placement.position,
        Point::new(limit, -limit)
    );
}

#[test]
fn oversized_images_are_scaled_down_on_add() {
    let mut scene = Scene::new();
    let id = image(&mut scene, 8192.0, 4096.0, Point::ZERO);
    let object = scene.object(id).unwrap();
    assert_eq!(object.placement.scale, Vec2::new(0.5, 0.5));
}

#[test]
fn z_order_ops_keep_the_workspace_at_the_bottom() {
    let mut scene = Scene::new();
    let a = image(&mut scene, 10.0, 10.0, Point::ZERO);
    let b = shape(&mut scene, Point::ZERO);

    scene.send_to_back(b).unwrap();
    assert!(scene.objects()[0].is_workspace());
    assert_eq!(scene.objects()[1].id(), b);
    assert_eq!(scene.objects()[2].id(), a);

    scene.bring_to_front(b).unwrap();
    assert_eq!(scene.objects().last().unwrap().id(), b);

    scene.send_backwards(b).unwrap();
    assert_eq!(scene.objects()[1].id(), b);
    // One more step must not push below the workspace.
    scene.send_backwards(b).unwrap();
    assert!(scene.objects()[0].is_workspace());
    assert_eq!(scene.objects()[1].id(), b);

    scene.bring_forward(b).unwrap();
    assert_eq!(scene.objects()[2].id(), b);
}

#[test]
fn duplicate_offsets_the_copy() {
    let mut scene = Scene::new();
    let id = image(&mut scene, 100.0, 100.0, Point::new(5.0, 5.0));
    let copy = scene.duplicate(id).unwrap();
    assert_ne!(copy, id);
    assert_eq!(
        scene.object(copy).unwrap().placement.position,
        Point::new(25.0, 25.0)
    );
}

#[test]
fn clear_content_keeps_only_the_workspace() {
    let mut scene = Scene::new();
    image(&mut scene, 10.0, 10.0, Point::ZERO);
    shape(&mut scene, Point::ZERO);
    scene.clear_content();
    assert_eq!(scene.objects().len(), 1);
    assert!(scene.objects()[0].is_workspace());
}

#[test]
fn ids_survive_snapshot_roundtrip_without_reuse() {
    let mut scene = Scene::new();
    let a = image(&mut scene, 10.0, 10.0, Point::ZERO);
    let json = scene.to_json().unwrap();

    let mut restored = Scene::from_json(&json).unwrap();
    assert!(restored.object(a).is_some());
    let b = image(&mut restored, 10.0, 10.0, Point::ZERO);
    assert!(b > a);
}
