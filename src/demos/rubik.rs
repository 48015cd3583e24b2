use glam::{Mat4, Vec3};

use crate::animation::{FaceTurnAnimator, TurnDirection, DEFAULT_PIVOT};
use crate::camera::{Camera, FreeFlyCamera, MovementDirection, Projection};
use crate::config::DemoConfig;
use crate::core::{Button, Controller, FrameInfo, KeyInput};
use crate::lighting::{LightParams, SHININESS_RANGE};
use crate::math::chain;
use crate::mesh::{face_colored_cube, Face, FaceColors, MeshData};
use crate::scene::{DrawItem, FrameDescription, MeshId, RenderableObject};

use super::Demo;

/// Edge length of one cubie
const CUBIE_SIZE: f32 = 0.33;
/// Distance between neighbouring cubie centres
const CUBIE_OFFSET: f32 = 0.35;

const INTERIOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
const TOP: [f32; 4] = [0.9, 0.9, 0.9, 1.0];
const FRONT: [f32; 4] = [0.0, 0.7, 0.0, 1.0];
const LEFT: [f32; 4] = [0.8, 0.4, 0.0, 1.0];
const BOTTOM: [f32; 4] = [0.7, 0.7, 0.0, 1.0];
const BACK: [f32; 4] = [0.0, 0.0, 0.7, 1.0];
const RIGHT: [f32; 4] = [0.7, 0.0, 0.0, 1.0];

const BACKGROUND: [f32; 4] = [0.827, 0.827, 0.827, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RubikVariant {
    /// Phong shading plus a light/camera panel
    Lit,
    /// Vertex colours only, keyboard only
    Flat,
}

/// One of the 27 small cubes
struct Cubie {
    colors: FaceColors,
    object: RenderableObject,
}

fn build_cubies() -> Vec<Cubie> {
    let mut cubies = Vec::with_capacity(27);
    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                let pick = |outer: bool, color: [f32; 4]| if outer { color } else { INTERIOR };
                let mut colors = FaceColors::uniform(INTERIOR);
                colors.set(Face::Top, pick(y == 1, TOP));
                colors.set(Face::Front, pick(z == 1, FRONT));
                colors.set(Face::Left, pick(x == -1, LEFT));
                colors.set(Face::Bottom, pick(y == -1, BOTTOM));
                colors.set(Face::Back, pick(z == -1, BACK));
                colors.set(Face::Right, pick(x == 1, RIGHT));

                let center = Vec3::new(x as f32, y as f32, z as f32) * CUBIE_OFFSET;
                let transform = chain(&[
                    Mat4::from_scale(Vec3::splat(CUBIE_SIZE)),
                    Mat4::from_translation(center),
                ]);
                let object = RenderableObject::new(MeshId(cubies.len()), transform);
                cubies.push(Cubie { colors, object });
            }
        }
    }
    cubies
}

/// 3x3x3 cube seen through a free-fly camera, top layer turnable
pub struct RubikDemo {
    variant: RubikVariant,
    camera: FreeFlyCamera,
    projection: Projection,
    cubies: Vec<Cubie>,
    animator: FaceTurnAnimator,
    light: LightParams,
}

impl RubikDemo {
    pub fn new(variant: RubikVariant, config: &DemoConfig) -> Self {
        let cubies = build_cubies();
        let centers: Vec<Vec3> = cubies
            .iter()
            .map(|c| c.object.transform.transform_point3(Vec3::ZERO))
            .collect();
        let animator = FaceTurnAnimator::from_layer(
            config.face_turn.angular_speed,
            DEFAULT_PIVOT,
            &centers,
            |p| p.y > CUBIE_OFFSET * 0.5,
        );

        Self {
            variant,
            camera: FreeFlyCamera::default().with_speeds(
                config.free_fly.movement_speed,
                config.free_fly.rotation_speed,
            ),
            projection: Projection::default(),
            cubies,
            animator,
            light: LightParams::rubik(),
        }
    }

    pub fn camera(&self) -> &FreeFlyCamera {
        &self.camera
    }

    pub fn animator(&self) -> &FaceTurnAnimator {
        &self.animator
    }

    fn turn(&mut self, direction: TurnDirection) {
        if self.animator.request_turn(direction) {
            log::debug!("top layer turn {:?}", direction);
        }
    }
}

impl Demo for RubikDemo {
    fn title(&self) -> &'static str {
        match self.variant {
            RubikVariant::Lit => "Rubik's Cube",
            RubikVariant::Flat => "Rubik's Cube (flat)",
        }
    }

    fn meshes(&self) -> Vec<MeshData> {
        self.cubies
            .iter()
            .map(|c| face_colored_cube(&c.colors))
            .collect()
    }

    fn handle_key(&mut self, input: KeyInput) {
        if !input.pressed {
            return;
        }
        // One movement step per key press
        let step = 1.0;
        match input.button {
            Button::ArrowUp => self.camera.process_movement(MovementDirection::Forward, step),
            Button::ArrowDown => self.camera.process_movement(MovementDirection::Backward, step),
            Button::ArrowLeft => self.camera.process_movement(MovementDirection::Left, step),
            Button::ArrowRight => self.camera.process_movement(MovementDirection::Right, step),
            Button::KeyQ => self.camera.process_movement(MovementDirection::Down, step),
            Button::KeyE => self.camera.process_movement(MovementDirection::Up, step),
            Button::KeyA => self.camera.yaw_left(),
            Button::KeyD => self.camera.yaw_right(),
            Button::KeyW => self.camera.pitch_up(),
            Button::KeyS => self.camera.pitch_down(),
            Button::Space => self.turn(TurnDirection::Clockwise),
            Button::Backspace => self.turn(TurnDirection::CounterClockwise),
            _ => {}
        }
    }

    fn update(&mut self, frame: &FrameInfo, _controller: &dyn Controller) {
        self.animator.update(frame.delta);
    }

    fn frame(&self, aspect: f32) -> FrameDescription {
        let mut frame = FrameDescription::new(
            &Camera::from(self.camera.clone()),
            &self.projection,
            aspect,
            self.light,
        )
        .with_clear_color(BACKGROUND);

        for (index, cubie) in self.cubies.iter().enumerate() {
            let model = self.animator.model_matrix(index, cubie.object.transform);
            frame.push(match self.variant {
                RubikVariant::Lit => DrawItem::lit(cubie.object.mesh, model),
                RubikVariant::Flat => DrawItem::unlit(cubie.object.mesh, model),
            });
        }
        frame
    }

    fn ui(&mut self, ctx: &egui::Context) {
        if self.variant == RubikVariant::Flat {
            return;
        }

        egui::Window::new("Light and camera").show(ctx, |ui| {
            ui.label("Light color:");
            let mut color = self.light.color.to_array();
            if ui.color_edit_button_rgb(&mut color).changed() {
                self.light.color = Vec3::from(color);
            }

            ui.label("Light position:");
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut self.light.position.x).speed(0.1).prefix("x: "));
                ui.add(egui::DragValue::new(&mut self.light.position.y).speed(0.1).prefix("y: "));
                ui.add(egui::DragValue::new(&mut self.light.position.z).speed(0.1).prefix("z: "));
            });

            ui.add(
                egui::Slider::new(&mut self.light.shininess, SHININESS_RANGE).text("Shininess"),
            );

            ui.separator();
            ui.label("Camera:");
            let moves = [
                ("Forward", MovementDirection::Forward),
                ("Backward", MovementDirection::Backward),
                ("Left", MovementDirection::Left),
                ("Right", MovementDirection::Right),
                ("Up", MovementDirection::Up),
                ("Down", MovementDirection::Down),
            ];
            for pair in moves.chunks(2) {
                ui.horizontal(|ui| {
                    for (label, direction) in pair {
                        if ui.button(*label).clicked() {
                            self.camera.process_movement(*direction, 1.0);
                        }
                    }
                });
            }

            ui.horizontal(|ui| {
                if ui.button("Yaw left").clicked() {
                    self.camera.yaw_left();
                }
                if ui.button("Yaw right").clicked() {
                    self.camera.yaw_right();
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Pitch up").clicked() {
                    self.camera.pitch_up();
                }
                if ui.button("Pitch down").clicked() {
                    self.camera.pitch_down();
                }
            });

            ui.separator();
            ui.label("Top layer:");
            ui.horizontal(|ui| {
                let idle = !self.animator.is_animating();
                if ui.add_enabled(idle, egui::Button::new("Turn left")).clicked() {
                    self.turn(TurnDirection::Clockwise);
                }
                if ui.add_enabled(idle, egui::Button::new("Turn right")).clicked() {
                    self.turn(TurnDirection::CounterClockwise);
                }
            });
        });
    }
}
