use clap::Parser;
use lode_blocks::BlockRegistry;
use lode_world::{TerrainGen, World};

mod app;
mod camera;
mod player;

/// Built-in copy of the default definitions, so the binary runs from any
/// working directory.
const DEFAULT_VOXELS: &str = include_str!("../assets/voxels.toml");

#[derive(Parser, Debug)]
#[command(name = "lode", about = "Chunked voxel sandbox with procedural terrain")]
struct Args {
    /// Terrain seed; random when omitted.
    #[arg(long)]
    seed: Option<i32>,
    /// Chunk populate radius around the origin (a (2r+1)^3 cube).
    #[arg(long, default_value_t = 3)]
    radius: i32,
    /// Face/block definition file.
    #[arg(long, default_value = "assets/voxels.toml")]
    voxels: String,
    #[arg(long, default_value_t = 1280)]
    width: i32,
    #[arg(long, default_value_t = 720)]
    height: i32,
    /// Start with frustum culling disabled.
    #[arg(long)]
    no_cull: bool,
    /// Start in walking mode instead of flying.
    #[arg(long)]
    walk: bool,
}

fn load_registry(path: &str) -> BlockRegistry {
    if std::path::Path::new(path).exists() {
        match BlockRegistry::load_from_path(path) {
            Ok(reg) => return reg,
            Err(e) => log::error!("failed to load {path}: {e}; using built-in definitions"),
        }
    } else {
        log::debug!("{path} not found; using built-in definitions");
    }
    BlockRegistry::from_toml_str(DEFAULT_VOXELS).expect("built-in voxel definitions parse")
}

fn random_seed() -> i32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as i32 ^ d.as_secs() as i32)
        .unwrap_or(0)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut reg = load_registry(&args.voxels);
    log::info!(
        "registry: {} faces, {} blocks",
        reg.face_count(),
        reg.block_count()
    );
    // One-way lock before any generation; later registration attempts are
    // programming errors and get dropped with a logged error.
    reg.lock();

    let seed = args.seed.unwrap_or_else(random_seed);
    log::info!("using seed {seed}");
    let mut world = World::new(TerrainGen::new(seed));
    world.populate(&reg, args.radius);

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("lode")
        .build();
    rl.set_target_fps(60);
    rl.disable_cursor();

    let mut app = app::App::new(world, reg, !args.no_cull, args.walk);
    while !rl.window_should_close() {
        app.frame(&mut rl, &thread);
    }
}
