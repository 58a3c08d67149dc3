use glam::{Mat4, Vec3};
use sdl2::keyboard::Keycode;

use crate::other::UpdateContext;

const PITCH_LIMIT: f32 = 89.0;
const MOVE_ACCEL: f32 = 20.0;
const DAMPING: f32 = 0.005;

/// A free-flying camera. Held entirely as explicit state and fed with an
/// [`UpdateContext`] each frame, so nothing about the view is process-global.
pub struct FlyCamera {
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
}

impl FlyCamera {
    pub fn new(position: Vec3, fov: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            yaw: 180.0,
            pitch: 0.0,
            fov,
        }
    }

    fn forward(&self) -> Vec3 {
        let pitch_rad = self.pitch.to_radians();
        let yaw_rad = self.yaw.to_radians();

        Vec3::new(
            yaw_rad.sin() * pitch_rad.cos(),
            -pitch_rad.sin(),
            yaw_rad.cos() * pitch_rad.cos(),
        )
        .normalize()
    }

    pub fn view(&self) -> Mat4 {
        let forward = self.forward();
        Mat4::look_at_rh(self.position, self.position + forward, Vec3::Y)
    }

    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, 0.1, 100.0)
    }

    /// Applies a mouse-look delta, keeping the pitch away from the poles.
    pub fn look(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw -= dx * sensitivity;
        self.pitch = (self.pitch + dy * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Adjusts the field of view from scroll wheel input.
    pub fn zoom(&mut self, scroll: f32) {
        self.fov = (self.fov - scroll).clamp(1.0, 90.0);
    }

    /// Accelerates along the held movement keys and integrates the position
    /// with exponential velocity damping.
    pub fn update(&mut self, ctx: &UpdateContext) {
        let forward = self.forward().with_y(0.0).normalize();
        let right = forward.cross(Vec3::Y).normalize();

        let mut accel = Vec3::ZERO;
        if ctx.keyboard.down.contains(&Keycode::W) {
            accel += forward;
        }
        if ctx.keyboard.down.contains(&Keycode::S) {
            accel -= forward;
        }
        if ctx.keyboard.down.contains(&Keycode::D) {
            accel += right;
        }
        if ctx.keyboard.down.contains(&Keycode::A) {
            accel -= right;
        }
        if ctx.keyboard.down.contains(&Keycode::Space) {
            accel += Vec3::Y;
        }
        if ctx.keyboard.down.contains(&Keycode::LShift) {
            accel -= Vec3::Y;
        }
        if accel != Vec3::ZERO {
            accel = accel.normalize() * MOVE_ACCEL;
        }

        self.velocity += accel * ctx.delta_time;
        self.position += self.velocity * ctx.delta_time;
        self.velocity *= DAMPING.powf(ctx.delta_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_clamps_pitch() {
        let mut camera = FlyCamera::new(Vec3::ZERO, 45.0);
        camera.look(0.0, 10000.0, 0.1);
        assert_eq!(camera.pitch, PITCH_LIMIT);
        camera.look(0.0, -20000.0, 0.1);
        assert_eq!(camera.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn zoom_clamps_fov() {
        let mut camera = FlyCamera::new(Vec3::ZERO, 45.0);
        camera.zoom(100.0);
        assert_eq!(camera.fov, 1.0);
        camera.zoom(-100.0);
        assert_eq!(camera.fov, 90.0);
    }

    #[test]
    fn forward_is_unit_length() {
        let mut camera = FlyCamera::new(Vec3::ZERO, 45.0);
        camera.look(123.0, -45.0, 0.1);
        assert!((camera.forward().length() - 1.0).abs() < 1e-5);
    }
}
