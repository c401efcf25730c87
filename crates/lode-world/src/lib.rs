//! Chunked voxel world: coordinate spaces, terrain generation, block storage.
#![forbid(unsafe_code)]

pub mod chunk;
pub mod chunk_coord;
pub mod terrain;
pub mod world;

pub use chunk::Chunk;
pub use chunk_coord::ChunkCoord;
pub use terrain::{HeightNoise, SimplexNoise, TerrainGen};
pub use world::World;

/// Edge length of a cubic chunk, in blocks.
pub const CHUNK_SIZE: usize = 32;
/// Blocks in one chunk plane (`CHUNK_SIZE`²).
pub const CHUNK_AREA: usize = CHUNK_SIZE * CHUNK_SIZE;
/// Blocks in one chunk (`CHUNK_SIZE`³).
pub const CHUNK_VOLUME: usize = CHUNK_AREA * CHUNK_SIZE;
