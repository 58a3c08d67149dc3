//! The demo scene: a Phong-lit cube and icosahedron orbited on foot, with a
//! point light that can be pushed around at runtime.

use std::sync::Arc;

use glam::{Mat4, Vec3, vec3};
use glow::HasContext;
use sdl2::keyboard::Keycode;

use crate::{
    abs::{Mesh, ShaderProgram},
    camera::FlyCamera,
    other::UpdateContext,
    render::geometry,
    shader_program,
};

const ICOSAHEDRON_RADIUS: f32 = 0.75;
const CUBE_HALF_EXTENT: f32 = 0.5;
const OBJECT_COLOR: Vec3 = vec3(1.0, 0.5, 0.31);
const LIGHT_COLOR: Vec3 = vec3(1.0, 1.0, 1.0);
/// Light translation speed, units per second.
const LIGHT_SPEED: f32 = 2.0;

/// The [`LitScene`] owns the GPU meshes, the shader programs and the light.
pub struct LitScene {
    cube_mesh: Mesh,
    icosahedron_mesh: Mesh,
    lighting_shader: ShaderProgram,
    lamp_shader: ShaderProgram,
    pub light_pos: Vec3,
}

impl LitScene {
    /// Builds the scene geometry and compiles both shader programs.
    pub fn new(gl: &Arc<glow::Context>) -> Self {
        let (vertices, indices) = geometry::cube(CUBE_HALF_EXTENT);
        let cube_mesh = Mesh::new(gl, &vertices, &indices);

        let (vertices, indices) = geometry::icosahedron(ICOSAHEDRON_RADIUS);
        let icosahedron_mesh = Mesh::new(gl, &vertices, &indices);

        log::info!(
            "Scene geometry ready: cube with {} indices, icosahedron with {} indices",
            cube_mesh.index_count(),
            icosahedron_mesh.index_count()
        );

        let lighting_shader = shader_program!(lighting, gl, ".");
        let lamp_shader = shader_program!(lamp, gl, ".");

        Self {
            cube_mesh,
            icosahedron_mesh,
            lighting_shader,
            lamp_shader,
            light_pos: vec3(1.2, 1.0, 2.0),
        }
    }

    /// Moves the light with the arrow keys (XZ plane) and PageUp/PageDown (Y).
    pub fn update(&mut self, ctx: &UpdateContext) {
        let mut direction = Vec3::ZERO;
        if ctx.keyboard.down.contains(&Keycode::Up) {
            direction.z -= 1.0;
        }
        if ctx.keyboard.down.contains(&Keycode::Down) {
            direction.z += 1.0;
        }
        if ctx.keyboard.down.contains(&Keycode::Left) {
            direction.x -= 1.0;
        }
        if ctx.keyboard.down.contains(&Keycode::Right) {
            direction.x += 1.0;
        }
        if ctx.keyboard.down.contains(&Keycode::PageUp) {
            direction.y += 1.0;
        }
        if ctx.keyboard.down.contains(&Keycode::PageDown) {
            direction.y -= 1.0;
        }
        self.light_pos += direction * LIGHT_SPEED * ctx.delta_time;
    }

    /// Renders the scene from the given camera.
    pub fn render(&self, gl: &Arc<glow::Context>, camera: &FlyCamera, aspect_ratio: f32) {
        unsafe {
            gl.clear_color(0.1, 0.1, 0.1, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        let view = camera.view();
        let projection = camera.projection(aspect_ratio);

        self.lighting_shader.use_program();
        self.lighting_shader.set_uniform("u_view", view);
        self.lighting_shader.set_uniform("u_projection", projection);
        self.lighting_shader.set_uniform("u_light_pos", self.light_pos);
        self.lighting_shader.set_uniform("u_view_pos", camera.position);
        self.lighting_shader.set_uniform("u_light_color", LIGHT_COLOR);
        self.lighting_shader.set_uniform("u_object_color", OBJECT_COLOR);

        self.lighting_shader
            .set_uniform("u_model", Mat4::from_translation(vec3(-1.0, 0.0, 0.0)));
        self.cube_mesh.draw();

        self.lighting_shader
            .set_uniform("u_model", Mat4::from_translation(vec3(1.0, 0.0, 0.0)));
        self.icosahedron_mesh.draw();

        self.lamp_shader.use_program();
        self.lamp_shader.set_uniform("u_view", view);
        self.lamp_shader.set_uniform("u_projection", projection);
        self.lamp_shader.set_uniform(
            "u_model",
            Mat4::from_translation(self.light_pos) * Mat4::from_scale(Vec3::splat(0.2)),
        );
        self.cube_mesh.draw();
    }
}
