use lode_geom::{Aabb, Mat4, Vec3};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

#[test]
fn vec3_arithmetic() {
    let a = Vec3::new(2.0, -1.0, 0.5);
    let b = Vec3::new(1.0, 3.0, -2.5);
    assert!(vapprox(a + b, Vec3::new(3.0, 2.0, -2.0), 1e-6));
    assert!(vapprox((a + b) - b, a, 1e-6));
    assert!(vapprox(a * 2.0, Vec3::new(4.0, -2.0, 1.0), 1e-6));
    assert!(vapprox(a / 2.0, Vec3::new(1.0, -0.5, 0.25), 1e-6));
    assert!(vapprox(-a, Vec3::new(-2.0, 1.0, -0.5), 1e-6));
}

#[test]
fn vec3_dot_cross_length() {
    let v = Vec3::new(0.0, 3.0, 4.0);
    assert!(approx(v.length(), 5.0, 1e-6));
    assert!(approx(v.normalized().length(), 1.0, 1e-6));
    // Normalizing zero stays zero instead of producing NaN.
    assert!(vapprox(Vec3::ZERO.normalized(), Vec3::ZERO, 1e-6));

    let i = Vec3::new(1.0, 0.0, 0.0);
    let j = Vec3::new(0.0, 1.0, 0.0);
    assert!(vapprox(i.cross(j), Vec3::new(0.0, 0.0, 1.0), 1e-6));
    assert!(approx(i.dot(j), 0.0, 1e-6));
}

#[test]
fn aabb_center() {
    let bb = Aabb::new(Vec3::new(-2.0, 0.0, 4.0), Vec3::new(2.0, 6.0, 8.0));
    assert!(vapprox(bb.center(), Vec3::new(0.0, 3.0, 6.0), 1e-6));
}

fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    let x = m.m[0] * p.x + m.m[4] * p.y + m.m[8] * p.z + m.m[12];
    let y = m.m[1] * p.x + m.m[5] * p.y + m.m[9] * p.z + m.m[13];
    let z = m.m[2] * p.x + m.m[6] * p.y + m.m[10] * p.z + m.m[14];
    Vec3::new(x, y, z)
}

#[test]
fn mat4_identity_mul() {
    let id = Mat4::IDENTITY;
    let persp = Mat4::perspective(70f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
    assert_eq!(id.mul(&persp), persp);
    assert_eq!(persp.mul(&id), persp);
}

#[test]
fn mat4_look_at_maps_eye_to_origin() {
    let eye = Vec3::new(3.0, 5.0, -7.0);
    let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UP);
    assert!(vapprox(transform_point(&view, eye), Vec3::ZERO, 1e-4));
}

#[test]
fn mat4_look_at_forward_is_negative_z() {
    // Right-handed convention: a point straight ahead of the eye lands on -Z.
    let eye = Vec3::new(0.0, 0.0, 10.0);
    let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UP);
    let ahead = transform_point(&view, Vec3::new(0.0, 0.0, 5.0));
    assert!(approx(ahead.x, 0.0, 1e-5));
    assert!(approx(ahead.y, 0.0, 1e-5));
    assert!(ahead.z < 0.0);
}
