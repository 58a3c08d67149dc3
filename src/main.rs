use glam::{Vec2, Vec3};
use glow::HasContext;
use sdl2::keyboard::Keycode;

use crate::{abs::App, camera::FlyCamera, config::Settings, scene::LitScene};

mod abs;
mod camera;
mod config;
mod other;
mod render;
mod scene;

#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr, $path_prefix:literal) => {{
        let vert = $crate::abs::Shader::new(
            &$gl,
            glow::VERTEX_SHADER,
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
        )
        .unwrap();
        let frag = $crate::abs::Shader::new(
            &$gl,
            glow::FRAGMENT_SHADER,
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/frag.glsl"
            )),
        )
        .unwrap();
        $crate::abs::ShaderProgram::new(&$gl, &vert, &frag).unwrap()
    }};
}

fn setup_logging() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
        .unwrap();
}

fn main() {
    setup_logging();

    let settings = Settings::load_or_default();
    let mut app = App::new(
        "Facet3D",
        settings.width,
        settings.height,
        settings.fullscreen,
        settings.vsync,
    );

    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
        app.gl.enable(glow::CULL_FACE);
        app.gl.cull_face(glow::BACK);
        app.gl.front_face(glow::CCW);
    }

    let mut scene = LitScene::new(&app.gl);
    let mut camera = FlyCamera::new(Vec3::new(0.0, 0.0, 3.0), settings.fov);

    let (mut width, mut height) = app.window.size();
    let mut keyboard_state = other::KeyboardState::default();
    let mut mouse_state = other::MouseState::default();
    let mut grabbed = true;

    let mut last_frame_time = std::time::Instant::now();

    'running: loop {
        let now = std::time::Instant::now();
        let delta_time = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        mouse_state.delta = Vec2::ZERO;
        mouse_state.scroll_delta = Vec2::ZERO;
        keyboard_state.pressed.clear();

        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(new_width, new_height),
                    ..
                } => {
                    width = new_width as u32;
                    height = new_height as u32;
                    unsafe {
                        app.gl.viewport(0, 0, new_width, new_height);
                    }
                }
                sdl2::event::Event::MouseMotion { xrel, yrel, .. } => {
                    mouse_state.delta = Vec2::new(xrel as f32, yrel as f32);
                }
                sdl2::event::Event::MouseWheel { x, y, .. } => {
                    mouse_state.scroll_delta = Vec2::new(x as f32, y as f32);
                }
                sdl2::event::Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    keyboard_state.down.insert(keycode);
                    keyboard_state.pressed.insert(keycode);
                }
                sdl2::event::Event::KeyUp {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    keyboard_state.down.remove(&keycode);
                }
                _ => {}
            }
        }

        if keyboard_state.pressed.contains(&Keycode::Escape) {
            grabbed = !grabbed;
        }
        app.sdl.mouse().set_relative_mouse_mode(grabbed);

        let ctx = other::UpdateContext::new(&keyboard_state, &mouse_state, delta_time);
        if grabbed {
            camera.look(
                ctx.mouse.delta.x,
                ctx.mouse.delta.y,
                settings.mouse_sensitivity,
            );
            camera.zoom(ctx.mouse.scroll_delta.y);
            camera.update(&ctx);
            scene.update(&ctx);
        }

        scene.render(&app.gl, &camera, width as f32 / height as f32);

        app.window
            .set_title(&format!("Facet3D - FPS: {:.2}", 1.0 / delta_time))
            .unwrap();
        app.window.gl_swap_window();
    }
}
