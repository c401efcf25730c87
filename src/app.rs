use hashbrown::HashMap;
use raylib::prelude::*;

use lode_blocks::BlockRegistry;
use lode_geom::{Frustum, Mat4};
use lode_mesh_cpu::build_chunk_mesh;
use lode_render_raylib::{ChunkRender, conv, upload_chunk_mesh};
use lode_world::{CHUNK_SIZE, ChunkCoord, World};

use crate::camera::{FOVY_DEG, FlyCamera};
use crate::player::Walker;

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;

#[derive(Clone, Copy, Default)]
pub struct DebugStats {
    pub total_chunks: usize,
    pub rendered_chunks: usize,
    pub culled_chunks: usize,
}

pub struct App {
    world: World,
    reg: BlockRegistry,
    renders: HashMap<ChunkCoord, ChunkRender>,
    cam: FlyCamera,
    walker: Option<Walker>,
    captured: bool,
    cull_enabled: bool,
    stats: DebugStats,
}

impl App {
    pub fn new(world: World, reg: BlockRegistry, cull_enabled: bool, walk: bool) -> Self {
        // Spawn a little above the terrain surface near the origin.
        let surface = world.terrain().height_at(5, 5) as f32;
        let spawn = Vector3::new(5.5, surface + 2.0, 5.5);
        let walker = walk.then(|| Walker::new(spawn));
        let cam = FlyCamera::new(spawn + Vector3::new(0.0, 4.0, 12.0));
        Self {
            world,
            reg,
            renders: HashMap::new(),
            cam,
            walker,
            captured: true,
            cull_enabled,
            stats: DebugStats::default(),
        }
    }

    pub fn frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let dt = rl.get_frame_time();
        self.update(rl, dt);
        self.remesh_one_dirty(rl, thread);
        self.render(rl, thread);
    }

    fn update(&mut self, rl: &mut RaylibHandle, dt: f32) {
        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            self.captured = !self.captured;
            if self.captured {
                rl.disable_cursor();
            } else {
                rl.enable_cursor();
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_C) {
            self.cull_enabled = !self.cull_enabled;
            log::info!(
                "frustum culling {}",
                if self.cull_enabled { "on" } else { "off" }
            );
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F) {
            self.walker = match self.walker.take() {
                Some(_) => None,
                None => Some(Walker::new(self.cam.position)),
            };
        }

        if !self.captured {
            return;
        }
        match self.walker.as_mut() {
            Some(walker) => {
                self.cam.update_look(rl);
                walker.update(rl, &self.world, self.cam.yaw, dt);
                self.cam.position = walker.eye_position();
            }
            None => self.cam.update(rl, dt),
        }
    }

    /// Rebuilds at most one dirty chunk per frame, then clears its flag.
    /// The build runs first so a failure leaves the chunk queued.
    fn remesh_one_dirty(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let Some(coord) = self.world.next_dirty() else {
            return;
        };
        let Some(chunk) = self.world.chunk(coord) else {
            return;
        };
        let cpu = build_chunk_mesh(&self.world, chunk, &self.reg);
        log::debug!(
            "meshed chunk ({}, {}, {}): {} vertices",
            coord.cx,
            coord.cy,
            coord.cz,
            cpu.vertex_count()
        );
        match upload_chunk_mesh(rl, thread, &cpu) {
            // Inserting over an existing entry drops the old model and
            // frees its GPU buffers.
            Some(cr) => {
                self.renders.insert(coord, cr);
            }
            // Empty build: the chunk holds no GPU resource at all.
            None => {
                self.renders.remove(&coord);
            }
        }
        self.world.mark_clean(coord);
    }

    fn frustum(&self, rl: &RaylibHandle) -> Frustum {
        let aspect = rl.get_screen_width() as f32 / rl.get_screen_height() as f32;
        let proj = Mat4::perspective(FOVY_DEG.to_radians(), aspect, NEAR_PLANE, FAR_PLANE);
        let eye = conv::vec3_from_rl(self.cam.position);
        let target = conv::vec3_from_rl(self.cam.position + self.cam.forward());
        let view = Mat4::look_at(eye, target, lode_geom::Vec3::UP);
        Frustum::from_proj_view(&proj.mul(&view))
    }

    fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let camera = self.cam.to_camera3d();
        let frustum = self.frustum(rl);
        self.stats = DebugStats {
            total_chunks: self.world.chunk_count(),
            ..DebugStats::default()
        };

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::new(178, 204, 229, 255));
        {
            let mut d3 = d.begin_mode3D(camera);
            for cr in self.renders.values() {
                if self.cull_enabled && !frustum.contains_aabb(&cr.bbox) {
                    self.stats.culled_chunks += 1;
                    continue;
                }
                d3.draw_model(&cr.model, Vector3::zero(), 1.0, Color::WHITE);
                self.stats.rendered_chunks += 1;
            }
        }
        self.draw_hud(&mut d);
    }

    fn draw_hud(&self, d: &mut RaylibDrawHandle) {
        let p = self.cam.position;
        let (xi, yi, zi) = (
            p.x.floor() as i32,
            p.y.floor() as i32,
            p.z.floor() as i32,
        );
        let s = CHUNK_SIZE as i32;
        let cc = ChunkCoord::containing(xi, yi, zi);
        let (lx, ly, lz) = (xi - cc.cx * s, yi - cc.cy * s, zi - cc.cz * s);

        d.draw_fps(12, 12);
        let lines = [
            format!(
                "C: {}/{} (culled {})",
                self.stats.rendered_chunks, self.stats.total_chunks, self.stats.culled_chunks
            ),
            format!("XYZ: {:.3} / {:.3} / {:.3}", p.x, p.y, p.z),
            format!("block: {xi} {yi} {zi}"),
            format!(
                "chunk: {lx} {ly} {lz} in {} {} {}",
                cc.cx, cc.cy, cc.cz
            ),
            format!(
                "[C] culling: {}   [F] mode: {}",
                if self.cull_enabled { "on" } else { "off" },
                if self.walker.is_some() { "walk" } else { "fly" }
            ),
        ];
        for (i, line) in lines.iter().enumerate() {
            d.draw_text(line, 12, 40 + 22 * i as i32, 20, Color::DARKGRAY);
        }
    }
}
