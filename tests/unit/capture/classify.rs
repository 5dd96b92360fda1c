use super::*;
use crate::foundation::core::{Point, Rgba8, Size};
use crate::scene::{FovParams, OutlineStyle, Placement, ShapeKind};

fn image_at(scene: &mut Scene, w: f64, h: f64, at: Point) -> ObjectId {
    scene
        .add_object(SceneObject::image("img", Size::new(w, h), Placement::at(at)).unwrap())
        .unwrap()
}

fn shape_at(scene: &mut Scene, at: Point) -> ObjectId {
    let outline = OutlineStyle {
        color: Rgba8::rgb(0xFF, 0x4B, 0x4B),
        width: 5.0,
    };
    scene
        .add_object(
            SceneObject::shape(ShapeKind::Rect, Size::new(60.0, 60.0), Placement::at(at), outline)
                .unwrap(),
        )
        .unwrap()
}

#[test]
fn tagged_base_drives_content_and_references() {
    let mut scene = Scene::new();
    let base = image_at(&mut scene, 800.0, 600.0, Point::ZERO);
    let arrow = shape_at(&mut scene, Point::new(500.0, 0.0));
    let reference = image_at(&mut scene, 200.0, 150.0, Point::new(-600.0, 0.0));
    scene.set_base_tag(base, true).unwrap();

    let classification = classify(&scene).unwrap();
    assert!(classification.has_tagged_base);
    assert_eq!(classification.content, vec![base]);
    assert_eq!(classification.references, vec![reference]);

    // Clean crops to the base only; marked covers all three.
    assert_eq!(
        classification.clean_bbox,
        scene.object(base).unwrap().bounding_rect()
    );
    let marked = classification.marked_bbox;
    for id in [base, arrow, reference] {
        let rect = scene.object(id).unwrap().bounding_rect();
        assert!(marked.union(rect) == marked, "marked bbox must cover {id:?}");
    }
}

#[test]
fn untagged_case_treats_all_images_as_content_and_largest_as_implicit_base() {
    let mut scene = Scene::new();
    let a = image_at(&mut scene, 800.0, 600.0, Point::ZERO);
    let b = image_at(&mut scene, 200.0, 150.0, Point::new(900.0, 0.0));
    shape_at(&mut scene, Point::new(-500.0, 0.0));

    let classification = classify(&scene).unwrap();
    assert!(!classification.has_tagged_base);
    // Every placed image doubles as untagged base content.
    assert_eq!(classification.content, vec![a, b]);
    // The larger image is the implicit base; the smaller one references.
    assert_eq!(classification.references, vec![b]);
}

#[test]
fn single_untagged_image_yields_zero_references() {
    let mut scene = Scene::new();
    let only = image_at(&mut scene, 300.0, 300.0, Point::ZERO);
    shape_at(&mut scene, Point::new(200.0, 0.0));

    let classification = classify(&scene).unwrap();
    assert_eq!(classification.content, vec![only]);
    assert!(classification.references.is_empty());
}

#[test]
fn area_ties_keep_insertion_order() {
    let mut scene = Scene::new();
    let first = image_at(&mut scene, 400.0, 300.0, Point::ZERO);
    let second = image_at(&mut scene, 300.0, 400.0, Point::new(600.0, 0.0));
    let third = image_at(&mut scene, 100.0, 100.0, Point::new(-600.0, 0.0));

    let classification = classify(&scene).unwrap();
    // first and second tie on area; the earlier one wins the implicit base.
    assert_eq!(classification.references, vec![second, third]);
    assert_eq!(classification.content, vec![first, second, third]);
}

#[test]
fn empty_scene_is_a_distinct_user_error() {
    let scene = Scene::new();
    assert!(matches!(classify(&scene), Err(MaquetteError::EmptyScene)));
}

#[test]
fn annotations_without_any_image_fail_with_empty_base() {
    let mut scene = Scene::new();
    shape_at(&mut scene, Point::ZERO);
    assert!(matches!(classify(&scene), Err(MaquetteError::EmptyBase)));
}

#[test]
fn scaling_changes_the_implicit_base_ranking() {
    let mut scene = Scene::new();
    let small_but_scaled = image_at(&mut scene, 100.0, 100.0, Point::ZERO);
    let big = image_at(&mut scene, 300.0, 300.0, Point::new(600.0, 0.0));
    scene
        .set_placement(
            small_but_scaled,
            Placement {
                position: Point::ZERO,
                rotation_deg: 0.0,
                scale: kurbo::Vec2::new(4.0, 4.0),
            },
        )
        .unwrap();

    let classification = classify(&scene).unwrap();
    // 400x400 rendered beats 300x300.
    assert_eq!(classification.references, vec![big]);
}

#[test]
fn marker_contributes_fov_data_but_never_references() {
    let mut scene = Scene::new();
    image_at(&mut scene, 400.0, 300.0, Point::ZERO);
    scene
        .add_object(
            SceneObject::fov_marker(
                FovParams::new(60.0, 200.0).unwrap(),
                Placement::at(Point::new(100.0, 100.0)),
            )
            .unwrap(),
        )
        .unwrap();

    let classification = classify(&scene).unwrap();
    assert!(classification.references.is_empty());
    let fov = classification.fov.unwrap();
    assert_eq!(fov.angle_deg, 60.0);
    assert_eq!(fov.position, Point::new(100.0, 100.0));

    // The marked crop still covers the marker graphics.
    let marker_rect = scene.fov_marker().unwrap().bounding_rect();
    assert_eq!(
        classification.marked_bbox.union(marker_rect),
        classification.marked_bbox
    );
}
