use lode_blocks::{BlockId, BlockRegistry};

use crate::chunk_coord::ChunkCoord;
use crate::terrain::{DIRT_BLOCK, GRASS_BLOCK, STONE_BLOCK, TerrainGen};
use crate::world::World;
use crate::{CHUNK_SIZE, CHUNK_VOLUME};

/// A cube of `CHUNK_SIZE`³ block cells. `None` is air; `Some` is a handle
/// into the locked block registry.
///
/// The dirty flag is raised whenever contents change and lowered by the
/// frame driver once a mesh rebuild for the new contents has completed, so
/// an interrupted build leaves the chunk queued for retry.
#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    blocks: Vec<Option<BlockId>>,
    dirty: bool,
}

impl Chunk {
    /// Creates an all-air chunk at the given chunk coordinate.
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: vec![None; CHUNK_VOLUME],
            dirty: false,
        }
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Linear index of an in-bounds local position. Callers must check
    /// [`Chunk::in_bounds`] first.
    #[inline]
    pub fn local_index(lx: usize, ly: usize, lz: usize) -> usize {
        (lz * CHUNK_SIZE + ly) * CHUNK_SIZE + lx
    }

    /// True iff every component lies in `[0, CHUNK_SIZE)`.
    #[inline]
    pub fn in_bounds(lx: i32, ly: i32, lz: i32) -> bool {
        let s = CHUNK_SIZE as i32;
        (0..s).contains(&lx) && (0..s).contains(&ly) && (0..s).contains(&lz)
    }

    /// World-space to local-space. Pure arithmetic; the result is only a
    /// valid cell address if it passes [`Chunk::in_bounds`].
    #[inline]
    pub fn world_to_local(&self, wx: i32, wy: i32, wz: i32) -> (i32, i32, i32) {
        let (bx, by, bz) = self.coord.base();
        (wx - bx, wy - by, wz - bz)
    }

    /// Bounds-checked cell read. Out of range reads as air.
    #[inline]
    pub fn get_local(&self, lx: i32, ly: i32, lz: i32) -> Option<BlockId> {
        if !Self::in_bounds(lx, ly, lz) {
            return None;
        }
        self.get_local_unchecked(lx as usize, ly as usize, lz as usize)
    }

    /// Cell read without the bounds check, for hot loops that already
    /// validated the position.
    #[inline]
    pub fn get_local_unchecked(&self, lx: usize, ly: usize, lz: usize) -> Option<BlockId> {
        self.blocks[Self::local_index(lx, ly, lz)]
    }

    /// Bounds-checked cell write. Out-of-range positions and writes of the
    /// current value are no-ops, so the dirty flag only rises on real
    /// changes.
    pub fn set_local(&mut self, lx: i32, ly: i32, lz: i32, block: Option<BlockId>) {
        if !Self::in_bounds(lx, ly, lz) {
            return;
        }
        let idx = Self::local_index(lx as usize, ly as usize, lz as usize);
        if self.blocks[idx] == block {
            return;
        }
        self.blocks[idx] = block;
        self.dirty = true;
    }

    /// Cell read by world position, falling through to the world for
    /// positions outside this chunk. This is how mesh building sees across
    /// chunk boundaries; space with no chunk reads as air.
    pub fn block_world_extended(
        &self,
        world: &World,
        wx: i32,
        wy: i32,
        wz: i32,
    ) -> Option<BlockId> {
        let (lx, ly, lz) = self.world_to_local(wx, wy, wz);
        if Self::in_bounds(lx, ly, lz) {
            return self.get_local_unchecked(lx as usize, ly as usize, lz as usize);
        }
        world.block_at(wx, wy, wz)
    }

    /// Fills the chunk from the terrain height map. Bit-reproducible for a
    /// given generator seed and chunk coordinate.
    ///
    /// Columns are stone below `h - 3`, dirt up to below `h`, grass at
    /// exactly `h`, air above. Strata whose block name is not registered
    /// fall back to air.
    pub fn generate(&mut self, terrain: &TerrainGen, reg: &BlockRegistry) {
        let grass = reg.block_id(GRASS_BLOCK);
        let dirt = reg.block_id(DIRT_BLOCK);
        let stone = reg.block_id(STONE_BLOCK);

        let s = CHUNK_SIZE as i32;
        let (bx, by, bz) = self.coord.base();
        for lz in 0..s {
            let wz = bz + lz;
            for lx in 0..s {
                let wx = bx + lx;
                let h = terrain.height_at(wx, wz);
                for ly in 0..s {
                    let wy = by + ly;
                    if wy < h {
                        if wy < h - 3 {
                            self.set_local(lx, ly, lz, stone);
                        } else {
                            self.set_local(lx, ly, lz, dirt);
                        }
                    }
                    if wy == h {
                        self.set_local(lx, ly, lz, grass);
                    }
                }
            }
        }
        // Generated chunks always queue for one mesh pass, even all-air
        // ones (they resolve to a meshless build).
        self.dirty = true;
    }

    /// True if no cell holds a block.
    pub fn is_all_air(&self) -> bool {
        self.blocks.iter().all(|b| b.is_none())
    }
}
