use lode_geom::Vec3;
use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn approx_abs_rel(a: f32, b: f32, atol: f32, rtol: f32) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= atol + rtol * scale
}

fn vapprox(a: Vec3, b: Vec3, atol: f32, rtol: f32) -> bool {
    approx_abs_rel(a.x, b.x, atol, rtol)
        && approx_abs_rel(a.y, b.y, atol, rtol)
        && approx_abs_rel(a.z, b.z, atol, rtol)
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e6)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    #[test]
    fn add_commutes(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(vapprox(a + b, b + a, 1e-5, 1e-6));
    }

    #[test]
    fn sub_inverts_add(a in arb_vec3(), b in arb_vec3()) {
        // Cancellation error scales with the magnitude of b, not a.
        let atol = 1e-4 + 1e-5 * b.length();
        prop_assert!(vapprox((a + b) - b, a, atol, 1e-5));
    }

    #[test]
    fn dot_is_symmetric(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(approx_abs_rel(a.dot(b), b.dot(a), 1e-4, 1e-5));
    }

    #[test]
    fn cross_is_orthogonal(a in arb_vec3(), b in arb_vec3()) {
        let c = a.cross(b);
        // Tolerance scales with the magnitudes involved.
        let scale = a.length() * b.length() * (a.length() + b.length());
        prop_assert!(a.dot(c).abs() <= 1e-2 + 1e-6 * scale);
        prop_assert!(b.dot(c).abs() <= 1e-2 + 1e-6 * scale);
    }

    #[test]
    fn normalized_has_unit_length_or_is_zero(a in arb_vec3()) {
        let n = a.normalized();
        if a.length() > 0.0 {
            prop_assert!(approx_abs_rel(n.length(), 1.0, 1e-4, 0.0));
        } else {
            prop_assert_eq!(n, Vec3::ZERO);
        }
    }
}
