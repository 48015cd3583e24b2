use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::camera::{Camera, OrbitCamera, Projection};
use crate::config::DemoConfig;
use crate::core::{Button, Controller, FrameInfo, KeyInput};
use crate::game::{CatchGame, Landing, PlatformInput};
use crate::lighting::LightParams;
use crate::mesh::{interior_cube, platform_slab, uv_sphere, Face, FaceColors, MeshData};
use crate::scene::{DrawItem, FrameDescription, MeshId};

use super::Demo;

const SKYBOX: MeshId = MeshId(0);
const PLATFORM: MeshId = MeshId(1);
const FALLING: MeshId = MeshId(2);

const SKYBOX_SCALE: f32 = 600.0;
const PLATFORM_THICKNESS: f32 = 0.2;
const PLATFORM_COLOR: [f32; 4] = [0.2, 0.6, 1.0, 1.0];
const FALLING_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const FALLING_RADIUS: f32 = 0.5;

fn sky_colors() -> FaceColors {
    let mut colors = FaceColors::uniform([0.45, 0.65, 0.9, 1.0]);
    colors.set(Face::Top, [0.25, 0.45, 0.85, 1.0]);
    colors.set(Face::Bottom, [0.2, 0.35, 0.2, 1.0]);
    colors
}

/// Catch-the-falling-object game with a skybox and a movable platform
pub struct CatchDemo {
    game: CatchGame,
    camera: OrbitCamera,
    projection: Projection,
    light: LightParams,
    falling_mesh: Option<MeshData>,
    rng: StdRng,
}

impl CatchDemo {
    pub fn new(config: &DemoConfig, falling_mesh: Option<MeshData>) -> Self {
        Self::with_rng(config, falling_mesh, StdRng::from_os_rng())
    }

    pub fn with_rng(config: &DemoConfig, falling_mesh: Option<MeshData>, rng: StdRng) -> Self {
        Self {
            game: CatchGame::new(config.catch),
            camera: OrbitCamera::new(30.0, 0.0, FRAC_PI_2)
                .with_steps(config.orbit.distance_step, config.orbit.angle_step),
            projection: Projection::new(FRAC_PI_4, 0.1, 1000.0),
            light: LightParams::catch(),
            falling_mesh,
            rng,
        }
    }

    pub fn game(&self) -> &CatchGame {
        &self.game
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    fn held_directions(controller: &dyn Controller) -> PlatformInput {
        PlatformInput {
            forward: controller.is_down(Button::KeyW),
            backward: controller.is_down(Button::KeyS),
            left: controller.is_down(Button::KeyA),
            right: controller.is_down(Button::KeyD),
        }
    }
}

impl Demo for CatchDemo {
    fn title(&self) -> &'static str {
        "Catch the falling spheres"
    }

    fn meshes(&self) -> Vec<MeshData> {
        let platform = platform_slab(
            self.game.settings().catch_half_width,
            PLATFORM_THICKNESS,
            PLATFORM_COLOR,
        );

        let falling = match &self.falling_mesh {
            Some(mesh) => mesh.clone().with_color(FALLING_COLOR).fitted(FALLING_RADIUS),
            None => uv_sphere(FALLING_RADIUS, 16, 24, FALLING_COLOR),
        };

        vec![interior_cube(&sky_colors()), platform, falling]
    }

    fn handle_key(&mut self, input: KeyInput) {
        if !input.pressed || input.repeat {
            return;
        }
        match input.button {
            Button::Space => self.camera.toggle_view(),
            Button::Backspace if self.game.is_game_over() => self.game.restart(),
            _ => {}
        }
    }

    fn update(&mut self, frame: &FrameInfo, controller: &dyn Controller) {
        let input = Self::held_directions(controller);
        for landing in self.game.update(frame.delta, input, &mut self.rng) {
            match landing {
                Landing::Caught => log::info!("caught! score {}", self.game.score()),
                Landing::Missed => log::info!(
                    "missed ({}/{})",
                    self.game.misses(),
                    self.game.settings().max_misses
                ),
            }
        }
        self.camera.track(self.game.platform_position());
    }

    fn frame(&self, aspect: f32) -> FrameDescription {
        let mut frame = FrameDescription::new(
            &Camera::from(self.camera.clone()),
            &self.projection,
            aspect,
            self.light,
        );

        frame.push(DrawItem::unlit(
            SKYBOX,
            Mat4::from_scale(Vec3::splat(SKYBOX_SCALE)),
        ));
        frame.push(DrawItem::lit(
            PLATFORM,
            Mat4::from_translation(self.game.platform_position()),
        ));
        for position in self.game.falling_objects() {
            frame.push(DrawItem::lit(FALLING, Mat4::from_translation(*position)));
        }
        frame
    }

    fn ui(&mut self, ctx: &egui::Context) {
        egui::Window::new("Game Controls").show(ctx, |ui| {
            if ui.button("Toggle View").clicked() {
                self.camera.toggle_view();
            }

            ui.label(format!("Score: {}", self.game.score()));
            ui.label(format!(
                "Misses: {}/{}",
                self.game.misses(),
                self.game.settings().max_misses
            ));

            if self.game.is_game_over() {
                ui.colored_label(egui::Color32::RED, "GAME OVER!");
                if ui.button("Restart").clicked() {
                    self.game.restart();
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WinitController;

    fn demo() -> CatchDemo {
        CatchDemo::with_rng(&DemoConfig::default(), None, StdRng::seed_from_u64(3))
    }

    #[test]
    fn held_keys_move_platform_and_camera_follows() {
        let mut demo = demo();
        let mut controller = WinitController::new();
        controller.apply(Button::KeyD, true);
        demo.handle_key(KeyInput {
            button: Button::Space,
            pressed: true,
            repeat: false,
        });

        demo.update(&FrameInfo::new(0, 0.1, 0.1), &controller);

        let x = demo.game().platform_position().x;
        assert!(x > 0.0);
        let frame = demo.frame(1.0);
        assert!((frame.camera_position - Vec3::new(x, -3.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn skybox_is_drawn_first_and_unlit() {
        let frame = demo().frame(1.0);
        assert_eq!(frame.draws[0].mesh, SKYBOX);
        assert!(frame.draws[0].unlit);
        assert_eq!(frame.draws.len(), 2);
    }

    #[test]
    fn custom_mesh_is_recoloured_and_fitted() {
        let mesh = uv_sphere(1.0, 4, 4, [0.0, 1.0, 0.0, 1.0]);
        let demo =
            CatchDemo::with_rng(&DemoConfig::default(), Some(mesh), StdRng::seed_from_u64(1));
        let meshes = demo.meshes();
        assert!(meshes[FALLING.0].vertices.iter().all(|v| v.color == FALLING_COLOR));
        let size = meshes[FALLING.0].bounds().unwrap().size();
        assert!((size.max_element() - 2.0 * FALLING_RADIUS).abs() < 1e-5);
    }
}
