use lode_world::World;
use raylib::prelude::*;

/// Walking player: gravity, jumping, and axis-separated collision against
/// the world grid. Any non-air block is solid; there is no per-material
/// distinction.
pub struct Walker {
    pub pos: Vector3, // feet position (x,z at center, y at the soles)
    pub vel_y: f32,
    pub on_ground: bool,
    pub height: f32,
    pub eye_height: f32,
    pub radius: f32,
    pub speed: f32,
    pub run_mult: f32,
    pub jump_speed: f32,
    pub gravity: f32,
}

impl Walker {
    pub fn new(spawn: Vector3) -> Self {
        Self {
            pos: spawn,
            vel_y: 0.0,
            on_ground: false,
            height: 1.75,
            eye_height: 1.6,
            radius: 0.3,
            speed: 4.0,
            run_mult: 2.0,
            jump_speed: 7.0,
            gravity: -20.0,
        }
    }

    pub fn eye_position(&self) -> Vector3 {
        Vector3::new(self.pos.x, self.pos.y + self.eye_height, self.pos.z)
    }

    /// True if the player's box at `pos` overlaps any solid block.
    fn collides(&self, world: &World, pos: Vector3) -> bool {
        let min_x = (pos.x - self.radius).floor() as i32;
        let max_x = (pos.x + self.radius).floor() as i32;
        let min_y = pos.y.floor() as i32;
        let max_y = (pos.y + self.height).floor() as i32;
        let min_z = (pos.z - self.radius).floor() as i32;
        let max_z = (pos.z + self.radius).floor() as i32;
        for y in min_y..=max_y {
            for z in min_z..=max_z {
                for x in min_x..=max_x {
                    if world.block_at(x, y, z).is_some() {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Moves along one axis in small steps until blocked; returns the
    /// distance actually covered.
    fn move_axis(&mut self, world: &World, axis: usize, amt: f32) -> f32 {
        if amt == 0.0 {
            return 0.0;
        }
        const STEP: f32 = 0.05;
        let step = STEP * amt.signum();
        let mut moved = 0.0f32;
        let mut remaining = amt;
        while remaining.abs() > 1e-4 {
            let s = if remaining.abs() < step.abs() {
                remaining
            } else {
                step
            };
            let mut next = self.pos;
            match axis {
                0 => next.x += s,
                1 => next.y += s,
                _ => next.z += s,
            }
            if self.collides(world, next) {
                break;
            }
            self.pos = next;
            moved += s;
            remaining -= s;
        }
        moved
    }

    pub fn update(&mut self, rl: &mut RaylibHandle, world: &World, yaw_deg: f32, dt: f32) {
        let yaw = yaw_deg.to_radians();
        let fwd = Vector3::new(yaw.cos(), 0.0, yaw.sin());
        let right = fwd.cross(Vector3::up());
        let mut wish = Vector3::zero();
        if rl.is_key_down(KeyboardKey::KEY_W) {
            wish += fwd;
        }
        if rl.is_key_down(KeyboardKey::KEY_S) {
            wish -= fwd;
        }
        if rl.is_key_down(KeyboardKey::KEY_A) {
            wish -= right;
        }
        if rl.is_key_down(KeyboardKey::KEY_D) {
            wish += right;
        }
        if wish.length() > 0.0 {
            wish = wish.normalized();
        }
        let run = if rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT) {
            self.run_mult
        } else {
            1.0
        };

        let mut below = self.pos;
        below.y -= 0.08;
        self.on_ground = self.collides(world, below);
        if self.on_ground {
            if self.vel_y < 0.0 {
                self.vel_y = 0.0;
            }
            if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
                self.vel_y = self.jump_speed;
                self.on_ground = false;
            }
        } else {
            self.vel_y += self.gravity * dt;
        }

        let dx = wish.x * self.speed * run * dt;
        let dz = wish.z * self.speed * run * dt;
        let dy = self.vel_y * dt;
        // One axis at a time, so sliding along walls works.
        self.move_axis(world, 0, dx);
        self.move_axis(world, 2, dz);
        let moved_y = self.move_axis(world, 1, dy);
        if dy < 0.0 && moved_y.abs() < dy.abs() * 0.5 {
            self.on_ground = true;
            self.vel_y = 0.0;
        }
    }
}
