//! View-frustum extraction and AABB visibility tests.

use crate::{Aabb, Mat4, Vec3};

/// A plane in `dot(normal, p) + d = 0` form. Points with a non-negative
/// signed distance are on the inside for frustum purposes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p) + self.d
    }

    fn normalized(self) -> Plane {
        let len = self.normal.length();
        if len > 0.0 {
            Plane {
                normal: self.normal / len,
                d: self.d / len,
            }
        } else {
            self
        }
    }
}

/// Six clip planes derived from a projection-view matrix.
///
/// The AABB test is conservative: a box intersecting the view volume is
/// never reported as outside. Boxes fully outside one plane are rejected;
/// everything else passes.
#[derive(Clone, Copy, Debug)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extracts the clip planes from `proj * view` (Gribb/Hartmann rows).
    pub fn from_proj_view(pv: &Mat4) -> Frustum {
        let r0 = pv.row(0);
        let r1 = pv.row(1);
        let r2 = pv.row(2);
        let r3 = pv.row(3);

        let plane = |a: [f32; 4], b: [f32; 4], sub: bool| {
            let s = if sub { -1.0 } else { 1.0 };
            Plane {
                normal: Vec3::new(b[0] + s * a[0], b[1] + s * a[1], b[2] + s * a[2]),
                d: b[3] + s * a[3],
            }
            .normalized()
        };

        Frustum {
            planes: [
                plane(r0, r3, false), // left
                plane(r0, r3, true),  // right
                plane(r1, r3, false), // bottom
                plane(r1, r3, true),  // top
                plane(r2, r3, false), // near
                plane(r2, r3, true),  // far
            ],
        }
    }

    /// True if `bb` is at least partially inside the frustum.
    pub fn contains_aabb(&self, bb: &Aabb) -> bool {
        for pl in &self.planes {
            // Vertex of the box furthest along the plane normal.
            let p = Vec3::new(
                if pl.normal.x >= 0.0 { bb.max.x } else { bb.min.x },
                if pl.normal.y >= 0.0 { bb.max.y } else { bb.min.y },
                if pl.normal.z >= 0.0 { bb.max.z } else { bb.min.z },
            );
            if pl.signed_distance(p) < 0.0 {
                return false;
            }
        }
        true
    }

    #[inline]
    pub fn contains_point(&self, p: Vec3) -> bool {
        self.planes.iter().all(|pl| pl.signed_distance(p) >= 0.0)
    }
}
