use lode_geom::{Aabb, Frustum, Mat4, Vec3};

fn unit_box_at(center: Vec3) -> Aabb {
    Aabb::new(center - Vec3::splat(0.5), center + Vec3::splat(0.5))
}

/// Camera at origin looking down -Z, 90 degree square frustum.
fn test_frustum() -> Frustum {
    let proj = Mat4::perspective(90f32.to_radians(), 1.0, 0.1, 100.0);
    let view = Mat4::look_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::UP);
    Frustum::from_proj_view(&proj.mul(&view))
}

#[test]
fn box_in_front_is_visible() {
    let f = test_frustum();
    assert!(f.contains_aabb(&unit_box_at(Vec3::new(0.0, 0.0, -5.0))));
}

#[test]
fn box_behind_camera_is_culled() {
    let f = test_frustum();
    assert!(!f.contains_aabb(&unit_box_at(Vec3::new(0.0, 0.0, 5.0))));
}

#[test]
fn box_beyond_far_plane_is_culled() {
    let f = test_frustum();
    assert!(!f.contains_aabb(&unit_box_at(Vec3::new(0.0, 0.0, -200.0))));
}

#[test]
fn box_far_to_the_side_is_culled() {
    // At z = -10 a 90 degree half-angle reaches |x| = 10; x = 30 is well out.
    let f = test_frustum();
    assert!(!f.contains_aabb(&unit_box_at(Vec3::new(30.0, 0.0, -10.0))));
    assert!(!f.contains_aabb(&unit_box_at(Vec3::new(0.0, -30.0, -10.0))));
}

#[test]
fn box_straddling_an_edge_is_kept() {
    // Centered on the left clip boundary: partially inside, must not be culled.
    let f = test_frustum();
    assert!(f.contains_aabb(&unit_box_at(Vec3::new(-10.0, 0.0, -10.0))));
}

#[test]
fn box_enclosing_the_whole_frustum_is_kept() {
    let f = test_frustum();
    let huge = Aabb::new(Vec3::splat(-1000.0), Vec3::splat(1000.0));
    assert!(f.contains_aabb(&huge));
}

#[test]
fn points_classify_consistently_with_boxes() {
    let f = test_frustum();
    let inside = Vec3::new(0.0, 0.0, -1.0);
    let outside = Vec3::new(0.0, 0.0, 1.0);
    assert!(f.contains_point(inside));
    assert!(!f.contains_point(outside));
    // A point inside implies the box around it is visible.
    assert!(f.contains_aabb(&unit_box_at(inside)));
}

#[test]
fn off_axis_camera_culls_correctly() {
    let eye = Vec3::new(50.0, 20.0, 50.0);
    let target = Vec3::new(0.0, 0.0, 0.0);
    let proj = Mat4::perspective(70f32.to_radians(), 16.0 / 9.0, 0.1, 500.0);
    let view = Mat4::look_at(eye, target, Vec3::UP);
    let f = Frustum::from_proj_view(&proj.mul(&view));

    // Looking at the origin: a box there is visible.
    assert!(f.contains_aabb(&unit_box_at(target)));
    // A box directly behind the eye along the view direction is not.
    let behind = eye + (eye - target).normalized() * 10.0;
    assert!(!f.contains_aabb(&unit_box_at(behind)));
}
