use hashbrown::HashMap;
use lode_blocks::{BlockId, BlockRegistry};

use crate::chunk::Chunk;
use crate::chunk_coord::ChunkCoord;
use crate::terrain::TerrainGen;

/// The chunk map: at most one chunk per chunk coordinate, populated once
/// at startup. Space not covered by any chunk always reads as air, which
/// makes boundary queries and collision probes uniform at the world edge.
pub struct World {
    chunks: HashMap<ChunkCoord, Chunk>,
    terrain: TerrainGen,
}

impl World {
    pub fn new(terrain: TerrainGen) -> Self {
        Self {
            chunks: HashMap::new(),
            terrain,
        }
    }

    #[inline]
    pub fn terrain(&self) -> &TerrainGen {
        &self.terrain
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Creates and generates every chunk in the cube
    /// `[-radius, radius]³` of chunk coordinates. Meshes are not built
    /// here; they build lazily, one per frame.
    pub fn populate(&mut self, reg: &BlockRegistry, radius: i32) {
        let start = std::time::Instant::now();
        for cz in -radius..=radius {
            for cy in -radius..=radius {
                for cx in -radius..=radius {
                    let coord = ChunkCoord::new(cx, cy, cz);
                    let mut chunk = Chunk::new(coord);
                    chunk.generate(&self.terrain, reg);
                    self.chunks.insert(coord, chunk);
                }
            }
        }
        log::info!(
            "populated {} chunks (radius {}) in {:.1?}",
            self.chunks.len(),
            radius,
            start.elapsed()
        );
    }

    /// Block at an integer world position. Positions with no chunk are air.
    pub fn block_at(&self, wx: i32, wy: i32, wz: i32) -> Option<BlockId> {
        let coord = ChunkCoord::containing(wx, wy, wz);
        let chunk = self.chunks.get(&coord)?;
        let (lx, ly, lz) = chunk.world_to_local(wx, wy, wz);
        chunk.get_local(lx, ly, lz)
    }

    /// Block at a float world position, flooring each component. This is
    /// the collision-probe surface: `None` is passable, `Some` is solid.
    pub fn block_at_f32(&self, x: f32, y: f32, z: f32) -> Option<BlockId> {
        self.block_at(x.floor() as i32, y.floor() as i32, z.floor() as i32)
    }

    /// Some chunk whose contents changed since its last mesh build.
    /// Selection order is map iteration order; ties are arbitrary.
    pub fn next_dirty(&self) -> Option<ChunkCoord> {
        self.chunks
            .values()
            .find(|c| c.is_dirty())
            .map(|c| c.coord())
    }

    /// Lowers a chunk's dirty flag. Called by the frame driver after it
    /// finished rebuilding that chunk's mesh.
    pub fn mark_clean(&mut self, coord: ChunkCoord) {
        if let Some(chunk) = self.chunks.get_mut(&coord) {
            chunk.mark_clean();
        }
    }

    /// Mutable chunk access for edits; anything changed marks itself dirty
    /// through [`Chunk::set_local`].
    pub fn chunk_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }
}
