use raylib::prelude::*;

pub const FOVY_DEG: f32 = 70.0;

/// Free-flying mouse-look camera. In walking mode only the look portion
/// runs; translation comes from the `Walker`.
pub struct FlyCamera {
    pub position: Vector3,
    pub yaw: f32,   // degrees
    pub pitch: f32, // degrees
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
}

impl FlyCamera {
    pub fn new(position: Vector3) -> Self {
        Self {
            position,
            yaw: -45.0,
            pitch: -20.0,
            move_speed: 12.0,
            mouse_sensitivity: 0.1,
        }
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D::perspective(
            self.position,
            self.position + self.forward(),
            Vector3::up(),
            FOVY_DEG,
        )
    }

    pub fn forward(&self) -> Vector3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vector3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalized()
    }

    pub fn right(&self) -> Vector3 {
        self.forward().cross(Vector3::up()).normalized()
    }

    /// Mouse look only; translation stays where it is.
    pub fn update_look(&mut self, rl: &mut RaylibHandle) {
        let md = rl.get_mouse_delta();
        self.yaw += md.x * self.mouse_sensitivity;
        self.pitch -= md.y * self.mouse_sensitivity;
        self.pitch = self.pitch.clamp(-89.9, 89.9);
    }

    /// Mouse look plus free WASD/QE flight.
    pub fn update(&mut self, rl: &mut RaylibHandle, dt: f32) {
        self.update_look(rl);

        let f = self.forward();
        let r = self.right();
        let mut wish = Vector3::zero();
        if rl.is_key_down(KeyboardKey::KEY_W) {
            wish += f;
        }
        if rl.is_key_down(KeyboardKey::KEY_S) {
            wish -= f;
        }
        if rl.is_key_down(KeyboardKey::KEY_A) {
            wish -= r;
        }
        if rl.is_key_down(KeyboardKey::KEY_D) {
            wish += r;
        }
        if rl.is_key_down(KeyboardKey::KEY_E) {
            wish += Vector3::up();
        }
        if rl.is_key_down(KeyboardKey::KEY_Q) {
            wish -= Vector3::up();
        }
        if wish.length() > 0.0 {
            let speed = if rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT) {
                self.move_speed * 3.0
            } else {
                self.move_speed
            };
            self.position += wish.normalized() * speed * dt;
        }
    }
}
