use lumen_engine::camera::{CameraConfig, FlyCamera, MouseLook, Movement};
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::frame::{FrameRenderer, ViewerState};
use lumen_engine::input::{InputFrame, InputState, Key};
use lumen_engine::render::{MeshPass, MeshRenderer};

use crate::scene::InteriorScene;

const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.1,
    g: 0.1,
    b: 0.1,
    a: 1.0,
};

const MOVEMENT_KEYS: [(Key, Movement); 4] = [
    (Key::W, Movement::Forward),
    (Key::S, Movement::Backward),
    (Key::A, Movement::Left),
    (Key::D, Movement::Right),
];

/// First-person walk through the interior scene.
pub struct InteriorApp {
    scene: InteriorScene,
    camera: FlyCamera,
    mouse: MouseLook,
    frame_renderer: FrameRenderer,
    mesh_renderer: MeshRenderer,
}

impl InteriorApp {
    pub fn new(scene: InteriorScene, camera: CameraConfig) -> Self {
        Self {
            scene,
            camera: FlyCamera::new(camera),
            mouse: MouseLook::new(),
            frame_renderer: FrameRenderer::new(),
            mesh_renderer: MeshRenderer::new(),
        }
    }

    fn handle_input(&mut self, input: &InputState, frame: &InputFrame, dt: f32) {
        if frame.focus_gained {
            self.mouse.reset();
        }

        for (key, movement) in MOVEMENT_KEYS {
            if input.key_down(key) {
                self.camera.process_movement(movement, dt);
            }
        }

        let (dx, dy) = frame.pointer_delta;
        if let Some((x, y)) = self.mouse.offsets(dx, dy) {
            self.camera.process_mouse_movement(x, y);
        }

        if frame.wheel_lines != 0.0 {
            self.camera.process_mouse_scroll(frame.wheel_lines);
        }

        if frame.key_pressed(Key::F) {
            let on = self.scene.toggle_flashlight();
            log::info!("flashlight {}", if on { "on" } else { "off" });
        }
    }
}

impl App for InteriorApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }

        let time = ctx.time;
        self.handle_input(ctx.input, ctx.input_frame, time.dt);

        if let Err(err) = self.scene.animate(time.elapsed) {
            log::warn!("animation skipped: {err}");
        }
        self.scene.aim_flashlight(&self.camera);

        let viewer = ViewerState::capture(&self.camera, ctx.aspect_ratio());

        let scene = &self.scene;
        let frame_renderer = &mut self.frame_renderer;
        let mesh_renderer = &mut self.mesh_renderer;

        ctx.render(CLEAR, |rctx, target| {
            let mut pass = MeshPass::new(mesh_renderer, &scene.assets, rctx, target);
            frame_renderer.submit(
                &scene.registry,
                &viewer,
                &scene.lights,
                time.elapsed,
                &mut pass,
            )?;
            Ok(())
        })
    }
}
