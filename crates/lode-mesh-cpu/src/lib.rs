//! CPU-side surface mesh extraction for chunks.
//!
//! Walks every cell of a chunk and emits a quad for each face whose
//! neighbor is air, looking through the world for neighbors in adjacent
//! chunks. The output is an interleaved vertex buffer ready for GPU
//! upload; building touches no GPU state.
#![forbid(unsafe_code)]

pub mod face;

pub use face::{FACE_VERTICES, FLOATS_PER_VERTEX, Face, VERTS_PER_FACE};

use lode_blocks::BlockRegistry;
use lode_geom::{Aabb, Vec3};
use lode_world::{CHUNK_SIZE, Chunk, ChunkCoord, World};

/// Finished CPU mesh for one chunk: world-space vertices, plus the chunk's
/// bounding box for frustum culling.
#[derive(Clone, Debug, Default)]
pub struct ChunkMeshCPU {
    pub coord: ChunkCoord,
    pub bbox: Aabb,
    pub verts: Vec<f32>,
}

impl ChunkMeshCPU {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.verts.len() / FLOATS_PER_VERTEX
    }

    /// True if no face was emitted; such a chunk gets no GPU resource.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }
}

/// World-space bounding box of a chunk: `base .. base + CHUNK_SIZE`.
pub fn chunk_aabb(coord: ChunkCoord) -> Aabb {
    let (bx, by, bz) = coord.base();
    let min = Vec3::new(bx as f32, by as f32, bz as f32);
    Aabb::new(min, min + Vec3::splat(CHUNK_SIZE as f32))
}

/// Appends one face quad at world position `(wx, wy, wz)` with the given
/// texture-array layer. Normal and UV come verbatim from the template;
/// position and layer are offset in.
fn append_face(verts: &mut Vec<f32>, face: Face, wx: i32, wy: i32, wz: i32, layer: u32) {
    let template = &FACE_VERTICES[face.index()];
    for v in template.chunks_exact(FLOATS_PER_VERTEX) {
        verts.extend_from_slice(&[
            v[0] + wx as f32,
            v[1] + wy as f32,
            v[2] + wz as f32,
            v[3],
            v[4],
            v[5],
            v[6],
            v[7],
            v[8] + layer as f32,
        ]);
    }
}

/// Extracts the visible surface of `chunk`.
///
/// Cells are visited in fixed z, y, x nested order; the order only affects
/// vertex layout, not which faces appear. A face is emitted when the
/// neighboring cell is air, where "no chunk there" counts as air so the
/// boundary of the populated world still gets faces.
pub fn build_chunk_mesh(world: &World, chunk: &Chunk, reg: &BlockRegistry) -> ChunkMeshCPU {
    let mut verts: Vec<f32> = Vec::new();
    let s = CHUNK_SIZE as i32;
    let (bx, by, bz) = chunk.coord().base();

    for lz in 0..s {
        let wz = bz + lz;
        for ly in 0..s {
            let wy = by + ly;
            for lx in 0..s {
                let wx = bx + lx;
                let Some(block_id) = chunk.get_local(lx, ly, lz) else {
                    continue;
                };
                let Some(block) = reg.block(block_id) else {
                    log::warn!("cell references unregistered block {block_id:?}, skipping");
                    continue;
                };
                for face in Face::ALL {
                    let (dx, dy, dz) = face.delta();
                    if chunk
                        .block_world_extended(world, wx + dx, wy + dy, wz + dz)
                        .is_some()
                    {
                        continue;
                    }
                    let layer = reg
                        .face(block.face_for(face.role()))
                        .map(|f| f.texture_index)
                        .unwrap_or(0);
                    append_face(&mut verts, face, wx, wy, wz, layer);
                }
            }
        }
    }

    ChunkMeshCPU {
        coord: chunk.coord(),
        bbox: chunk_aabb(chunk.coord()),
        verts,
    }
}
