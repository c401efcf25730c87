//! Raylib-based GPU upload and draw handles for chunk meshes.
// Unsafe is required for Raylib mesh/model upload operations in this crate.

use lode_mesh_cpu::{ChunkMeshCPU, FLOATS_PER_VERTEX};
use lode_world::ChunkCoord;
use raylib::prelude::*;

pub mod conv {
    use lode_geom::{Aabb, Vec3};

    pub fn vec3_to_rl(v: Vec3) -> raylib::prelude::Vector3 {
        raylib::prelude::Vector3::new(v.x, v.y, v.z)
    }

    pub fn vec3_from_rl(v: raylib::prelude::Vector3) -> Vec3 {
        Vec3 {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    pub fn aabb_to_rl(bb: Aabb) -> raylib::core::math::BoundingBox {
        raylib::core::math::BoundingBox::new(vec3_to_rl(bb.min), vec3_to_rl(bb.max))
    }
}

/// Stand-in tints for texture-array layers, cycled by layer index. Binding
/// real textures to the array slots is the embedding application's job;
/// with the default material these tints keep the strata distinguishable.
const LAYER_TINTS: [[u8; 3]; 5] = [
    [106, 170, 64],  // grass top
    [121, 137, 72],  // grass side
    [134, 96, 67],   // dirt
    [136, 136, 136], // stone
    [104, 83, 50],   // wood
];

#[inline]
fn layer_tint(layer: usize) -> [u8; 3] {
    LAYER_TINTS[layer % LAYER_TINTS.len()]
}

/// GPU-resident mesh for one chunk. Dropping it releases the GPU buffers
/// through the `Model` drop, so replacing an entry in a render map always
/// frees the previous resource first.
pub struct ChunkRender {
    pub coord: ChunkCoord,
    pub bbox: lode_geom::Aabb,
    pub model: raylib::core::models::Model,
    pub vertex_count: usize,
}

/// Uploads a CPU chunk mesh. Returns `None` for an empty mesh: a chunk
/// with no visible faces gets no GPU resource at all.
///
/// The interleaved 9-float vertices are split into raylib's separate
/// position/normal/texcoord/color streams; the texture-layer float becomes
/// a per-vertex tint. Vertices are already in world space, so the model
/// draws at the origin with no transform.
pub fn upload_chunk_mesh(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    cpu: &ChunkMeshCPU,
) -> Option<ChunkRender> {
    let vertex_count = cpu.vertex_count();
    if vertex_count == 0 {
        return None;
    }

    let mut raw: raylib::ffi::Mesh = unsafe { std::mem::zeroed() };
    raw.vertexCount = vertex_count as i32;
    raw.triangleCount = (vertex_count / 3) as i32;
    unsafe {
        let vbytes = (vertex_count * 3 * std::mem::size_of::<f32>()) as u32;
        let tbytes = (vertex_count * 2 * std::mem::size_of::<f32>()) as u32;
        let cbytes = (vertex_count * 4 * std::mem::size_of::<u8>()) as u32;
        raw.vertices = raylib::ffi::MemAlloc(vbytes) as *mut f32;
        raw.normals = raylib::ffi::MemAlloc(vbytes) as *mut f32;
        raw.texcoords = raylib::ffi::MemAlloc(tbytes) as *mut f32;
        raw.colors = raylib::ffi::MemAlloc(cbytes) as *mut u8;

        for (i, v) in cpu.verts.chunks_exact(FLOATS_PER_VERTEX).enumerate() {
            std::ptr::copy_nonoverlapping(v.as_ptr(), raw.vertices.add(i * 3), 3);
            std::ptr::copy_nonoverlapping(v.as_ptr().add(3), raw.normals.add(i * 3), 3);
            std::ptr::copy_nonoverlapping(v.as_ptr().add(6), raw.texcoords.add(i * 2), 2);
            let tint = layer_tint(v[8] as usize);
            let c = raw.colors.add(i * 4);
            *c = tint[0];
            *c.add(1) = tint[1];
            *c.add(2) = tint[2];
            *c.add(3) = 255;
        }
    }

    let mut mesh = unsafe { raylib::core::models::Mesh::from_raw(raw) };
    unsafe {
        mesh.upload(false);
    }
    let model = rl
        .load_model_from_mesh(thread, unsafe { mesh.make_weak() })
        .ok()?;

    Some(ChunkRender {
        coord: cpu.coord,
        bbox: cpu.bbox,
        model,
        vertex_count,
    })
}
