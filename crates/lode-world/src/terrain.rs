//! Height-map terrain from layered 2D noise.

use fastnoise_lite::{FastNoiseLite, NoiseType};

/// Block names the generator places, resolved against the registry at
/// generation time.
pub const GRASS_BLOCK: &str = "core.grass";
pub const DIRT_BLOCK: &str = "core.dirt";
pub const STONE_BLOCK: &str = "core.stone";

/// Per-octave sample offsets, decorrelating the layers without extra seeds.
const OCTAVE_OFFSETS: [(f32, f32); 4] = [
    (9_134_542.0, 312_781.0),
    (3_320_191.0, -554_605.0),
    (-9_743_106.0, 761_011.0),
    (-4_211_348.0, -812_416.0),
];

const BASE_FREQUENCY: f32 = 128.0;
const BASE_AMPLITUDE: f32 = 64.0;

/// 2D scalar noise source for terrain height.
///
/// Contract: deterministic for a given implementation instance, smooth,
/// and bounded to `[-1, 1]`.
pub trait HeightNoise: Send + Sync {
    fn sample(&self, x: f32, y: f32) -> f32;
}

/// Seeded OpenSimplex2 noise. Frequency is fixed at 1.0 so callers control
/// scale through the sample coordinates alone.
pub struct SimplexNoise {
    noise: FastNoiseLite,
}

impl SimplexNoise {
    pub fn seeded(seed: i32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(1.0));
        Self { noise }
    }
}

impl HeightNoise for SimplexNoise {
    #[inline]
    fn sample(&self, x: f32, y: f32) -> f32 {
        self.noise.get_noise_2d(x, y)
    }
}

/// Deterministic terrain height source: four octaves of 2D noise, each at
/// half the frequency and half the amplitude of the previous one.
pub struct TerrainGen {
    seed: i32,
    noise: Box<dyn HeightNoise>,
}

impl TerrainGen {
    pub fn new(seed: i32) -> Self {
        Self {
            seed,
            noise: Box::new(SimplexNoise::seeded(seed)),
        }
    }

    /// Swaps in a custom noise source (tests use a constant one).
    pub fn with_noise(seed: i32, noise: Box<dyn HeightNoise>) -> Self {
        Self { seed, noise }
    }

    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Terrain surface height for the world column `(wx, wz)`. The octave
    /// sum is truncated toward zero, matching `as i32`.
    pub fn height_at(&self, wx: i32, wz: i32) -> i32 {
        let mut frequency = BASE_FREQUENCY;
        let mut amplitude = BASE_AMPLITUDE;
        let mut height = 0.0f32;
        for (ox, oz) in OCTAVE_OFFSETS {
            let x = (wx as f32 + ox) / frequency;
            let z = (wz as f32 + oz) / frequency;
            height += self.noise.sample(x, z) * amplitude;
            frequency *= 0.5;
            amplitude *= 0.5;
        }
        height as i32
    }
}
