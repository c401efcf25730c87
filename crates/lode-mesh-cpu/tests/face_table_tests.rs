use lode_mesh_cpu::{FACE_VERTICES, FLOATS_PER_VERTEX, Face, VERTS_PER_FACE};

#[test]
fn template_positions_are_unit_cube_corners() {
    for face in Face::ALL {
        for v in FACE_VERTICES[face.index()].chunks_exact(FLOATS_PER_VERTEX) {
            for p in &v[0..3] {
                assert!(*p == 0.0 || *p == 1.0, "position {p} not on the unit cube");
            }
            for uv in &v[6..8] {
                assert!(*uv == 0.0 || *uv == 1.0);
            }
            // The layer slot is zero until emit substitutes it.
            assert_eq!(v[8], 0.0);
        }
    }
}

#[test]
fn template_normals_match_face_deltas() {
    for face in Face::ALL {
        let (dx, dy, dz) = face.delta();
        for v in FACE_VERTICES[face.index()].chunks_exact(FLOATS_PER_VERTEX) {
            assert_eq!([v[3], v[4], v[5]], [dx as f32, dy as f32, dz as f32]);
        }
    }
}

#[test]
fn template_vertices_lie_on_the_face_plane() {
    // All six vertices of e.g. PosX sit at x = 1, of NegX at x = 0, etc.
    for face in Face::ALL {
        let (dx, dy, dz) = face.delta();
        for v in FACE_VERTICES[face.index()].chunks_exact(FLOATS_PER_VERTEX) {
            if dx != 0 {
                assert_eq!(v[0], if dx > 0 { 1.0 } else { 0.0 });
            }
            if dy != 0 {
                assert_eq!(v[1], if dy > 0 { 1.0 } else { 0.0 });
            }
            if dz != 0 {
                assert_eq!(v[2], if dz > 0 { 1.0 } else { 0.0 });
            }
        }
    }
}

#[test]
fn template_triangles_wind_counter_clockwise() {
    for face in Face::ALL {
        let (dx, dy, dz) = face.delta();
        let n = [dx as f32, dy as f32, dz as f32];
        let t = &FACE_VERTICES[face.index()];
        for tri in 0..VERTS_PER_FACE / 3 {
            let at = |i: usize, c: usize| t[(tri * 3 + i) * FLOATS_PER_VERTEX + c];
            let e1 = [at(1, 0) - at(0, 0), at(1, 1) - at(0, 1), at(1, 2) - at(0, 2)];
            let e2 = [at(2, 0) - at(0, 0), at(2, 1) - at(0, 1), at(2, 2) - at(0, 2)];
            let cross = [
                e1[1] * e2[2] - e1[2] * e2[1],
                e1[2] * e2[0] - e1[0] * e2[2],
                e1[0] * e2[1] - e1[1] * e2[0],
            ];
            let d = cross[0] * n[0] + cross[1] * n[1] + cross[2] * n[2];
            assert!(
                d > 0.0,
                "{face:?} triangle {tri} winds against its normal"
            );
        }
    }
}

#[test]
fn face_roles_follow_the_direction_table() {
    use lode_blocks::FaceRole;
    assert_eq!(Face::PosY.role(), FaceRole::Top);
    assert_eq!(Face::NegY.role(), FaceRole::Bottom);
    for face in [Face::PosX, Face::NegX, Face::PosZ, Face::NegZ] {
        assert_eq!(face.role(), FaceRole::Side);
    }
}
