use lode_blocks::FaceRole;

/// The six axis-aligned cube faces, in the order of [`FACE_VERTICES`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    /// Classifies the face into top/bottom/side role for texture lookup.
    #[inline]
    pub fn role(self) -> FaceRole {
        match self {
            Face::PosY => FaceRole::Top,
            Face::NegY => FaceRole::Bottom,
            _ => FaceRole::Side,
        }
    }
}

/// Floats per mesh vertex: position (3), normal (3), `(u, v, layer)` (3).
pub const FLOATS_PER_VERTEX: usize = 9;
/// Vertices per emitted face (two triangles, no index buffer).
pub const VERTS_PER_FACE: usize = 6;

/// Immutable unit-quad template for each face: six vertices of nine floats
/// `(px py pz nx ny nz u v layer)`, counter-clockwise when viewed from
/// outside the cube. Positions are offset by the block's world coordinate
/// at emit time and the layer slot (held at 0 here) receives the block
/// face's texture-array index.
#[rustfmt::skip]
pub const FACE_VERTICES: [[f32; FLOATS_PER_VERTEX * VERTS_PER_FACE]; 6] = [
    // PosY (top)
    [
        0.0, 1.0, 1.0,  0.0, 1.0, 0.0,  0.0, 0.0, 0.0,
        1.0, 1.0, 1.0,  0.0, 1.0, 0.0,  1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,  0.0, 1.0, 0.0,  0.0, 1.0, 0.0,
        1.0, 1.0, 0.0,  0.0, 1.0, 0.0,  1.0, 1.0, 0.0,
        0.0, 1.0, 0.0,  0.0, 1.0, 0.0,  0.0, 1.0, 0.0,
        1.0, 1.0, 1.0,  0.0, 1.0, 0.0,  1.0, 0.0, 0.0,
    ],
    // NegY (bottom)
    [
        0.0, 0.0, 0.0,  0.0, -1.0, 0.0,  0.0, 0.0, 0.0,
        1.0, 0.0, 0.0,  0.0, -1.0, 0.0,  1.0, 0.0, 0.0,
        0.0, 0.0, 1.0,  0.0, -1.0, 0.0,  0.0, 1.0, 0.0,
        1.0, 0.0, 1.0,  0.0, -1.0, 0.0,  1.0, 1.0, 0.0,
        0.0, 0.0, 1.0,  0.0, -1.0, 0.0,  0.0, 1.0, 0.0,
        1.0, 0.0, 0.0,  0.0, -1.0, 0.0,  1.0, 0.0, 0.0,
    ],
    // PosX (right)
    [
        1.0, 0.0, 1.0,  1.0, 0.0, 0.0,  0.0, 0.0, 0.0,
        1.0, 0.0, 0.0,  1.0, 0.0, 0.0,  1.0, 0.0, 0.0,
        1.0, 1.0, 1.0,  1.0, 0.0, 0.0,  0.0, 1.0, 0.0,
        1.0, 1.0, 0.0,  1.0, 0.0, 0.0,  1.0, 1.0, 0.0,
        1.0, 1.0, 1.0,  1.0, 0.0, 0.0,  0.0, 1.0, 0.0,
        1.0, 0.0, 0.0,  1.0, 0.0, 0.0,  1.0, 0.0, 0.0,
    ],
    // NegX (left)
    [
        0.0, 0.0, 0.0,  -1.0, 0.0, 0.0,  0.0, 0.0, 0.0,
        0.0, 0.0, 1.0,  -1.0, 0.0, 0.0,  1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,  -1.0, 0.0, 0.0,  0.0, 1.0, 0.0,
        0.0, 1.0, 1.0,  -1.0, 0.0, 0.0,  1.0, 1.0, 0.0,
        0.0, 1.0, 0.0,  -1.0, 0.0, 0.0,  0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,  -1.0, 0.0, 0.0,  1.0, 0.0, 0.0,
    ],
    // PosZ (front)
    [
        0.0, 0.0, 1.0,  0.0, 0.0, 1.0,  0.0, 0.0, 0.0,
        1.0, 0.0, 1.0,  0.0, 0.0, 1.0,  1.0, 0.0, 0.0,
        0.0, 1.0, 1.0,  0.0, 0.0, 1.0,  0.0, 1.0, 0.0,
        1.0, 1.0, 1.0,  0.0, 0.0, 1.0,  1.0, 1.0, 0.0,
        0.0, 1.0, 1.0,  0.0, 0.0, 1.0,  0.0, 1.0, 0.0,
        1.0, 0.0, 1.0,  0.0, 0.0, 1.0,  1.0, 0.0, 0.0,
    ],
    // NegZ (back)
    [
        1.0, 0.0, 0.0,  0.0, 0.0, -1.0,  0.0, 0.0, 0.0,
        0.0, 0.0, 0.0,  0.0, 0.0, -1.0,  1.0, 0.0, 0.0,
        1.0, 1.0, 0.0,  0.0, 0.0, -1.0,  0.0, 1.0, 0.0,
        0.0, 1.0, 0.0,  0.0, 0.0, -1.0,  1.0, 1.0, 0.0,
        1.0, 1.0, 0.0,  0.0, 0.0, -1.0,  0.0, 1.0, 0.0,
        0.0, 0.0, 0.0,  0.0, 0.0, -1.0,  1.0, 0.0, 0.0,
    ],
];
