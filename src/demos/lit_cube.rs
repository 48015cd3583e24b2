use std::f32::consts::FRAC_PI_2;

use crate::animation::ArrangementAnimator;
use crate::camera::{Camera, OrbitCamera, Projection};
use crate::config::DemoConfig;
use crate::core::{Button, Controller, FrameInfo, KeyInput};
use crate::lighting::{LightParams, SHININESS_RANGE};
use crate::mesh::{face_colored_cube, Face, FaceColors, MeshData};
use crate::scene::{DrawItem, FrameDescription, MeshId};

use super::Demo;

const CUBE: MeshId = MeshId(0);

const DEFAULT_FACE_COLORS: FaceColors = FaceColors([
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
]);

/// Phong-lit cube with an orbiting diamond and a lighting panel
pub struct LitCubeDemo {
    camera: OrbitCamera,
    projection: Projection,
    arrangement: ArrangementAnimator,
    light: LightParams,
    background: [f32; 3],
    face_colors: FaceColors,
    selected_face: Face,
    colors_changed: bool,
}

impl LitCubeDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            camera: OrbitCamera::default()
                .with_steps(config.orbit.distance_step, config.orbit.angle_step),
            projection: Projection::new(FRAC_PI_2, 0.1, 100.0),
            arrangement: ArrangementAnimator::default(),
            light: LightParams::lit_cube(),
            background: [1.0, 1.0, 1.0],
            face_colors: DEFAULT_FACE_COLORS,
            selected_face: Face::Top,
            colors_changed: false,
        }
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn arrangement(&self) -> &ArrangementAnimator {
        &self.arrangement
    }

    pub fn set_face_color(&mut self, face: Face, color: [f32; 4]) {
        self.face_colors.set(face, color);
        self.colors_changed = true;
    }
}

impl Demo for LitCubeDemo {
    fn title(&self) -> &'static str {
        "Lit cube"
    }

    fn meshes(&self) -> Vec<MeshData> {
        vec![face_colored_cube(&self.face_colors)]
    }

    fn handle_key(&mut self, input: KeyInput) {
        if !input.pressed {
            return;
        }
        match input.button {
            Button::ArrowLeft => self.camera.decrease_zy_angle(),
            Button::ArrowRight => self.camera.increase_zy_angle(),
            Button::ArrowDown => self.camera.increase_distance(),
            Button::ArrowUp => self.camera.decrease_distance(),
            Button::KeyU => self.camera.increase_zx_angle(),
            Button::KeyD => self.camera.decrease_zx_angle(),
            Button::Space if !input.repeat => self.arrangement.toggle(),
            _ => {}
        }
    }

    fn update(&mut self, frame: &FrameInfo, _controller: &dyn Controller) {
        self.arrangement.advance(frame.delta);
    }

    fn frame(&self, aspect: f32) -> FrameDescription {
        let [r, g, b] = self.background;
        let mut frame = FrameDescription::new(
            &Camera::from(self.camera.clone()),
            &self.projection,
            aspect,
            self.light,
        )
        .with_clear_color([r, g, b, 1.0]);

        frame.push(DrawItem::lit(CUBE, self.arrangement.center_model()));
        frame.push(DrawItem::lit(CUBE, self.arrangement.diamond_model()));
        frame
    }

    fn ui(&mut self, ctx: &egui::Context) {
        egui::Window::new("Lighting Controls")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add(
                    egui::Slider::new(&mut self.light.shininess, SHININESS_RANGE)
                        .text("Shininess"),
                );

                ui.separator();
                ui.label("Illumination Strengths:");
                for (name, strength) in [
                    ("Ambient", &mut self.light.ambient),
                    ("Diffuse", &mut self.light.diffuse),
                    ("Specular", &mut self.light.specular),
                ] {
                    ui.add(egui::Slider::new(&mut strength.x, 0.0..=1.0).text(format!("{name} R")));
                    ui.add(egui::Slider::new(&mut strength.y, 0.0..=1.0).text(format!("{name} G")));
                    ui.add(egui::Slider::new(&mut strength.z, 0.0..=1.0).text(format!("{name} B")));
                }

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label("Background Color:");
                    ui.color_edit_button_rgb(&mut self.background);
                });

                ui.separator();
                ui.label("Center Cube Face Color:");
                egui::ComboBox::from_label("Face")
                    .selected_text(self.selected_face.name())
                    .show_ui(ui, |ui| {
                        for face in Face::ALL {
                            ui.selectable_value(&mut self.selected_face, face, face.name());
                        }
                    });

                let mut color = self.face_colors.get(self.selected_face);
                if ui.color_edit_button_rgba_unmultiplied(&mut color).changed() {
                    self.set_face_color(self.selected_face, color);
                }
            });
    }

    fn take_mesh_updates(&mut self) -> Vec<(MeshId, MeshData)> {
        if !std::mem::take(&mut self.colors_changed) {
            return Vec::new();
        }
        vec![(CUBE, face_colored_cube(&self.face_colors))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: Button) -> KeyInput {
        KeyInput {
            button,
            pressed: true,
            repeat: false,
        }
    }

    #[test]
    fn arrow_keys_drive_orbit_camera() {
        let mut demo = LitCubeDemo::new(&DemoConfig::default());
        let start = demo.camera().distance();
        demo.handle_key(press(Button::ArrowDown));
        assert!(demo.camera().distance() > start);
        demo.handle_key(press(Button::ArrowRight));
        assert!(demo.camera().azimuth() > 0.0);
        demo.handle_key(press(Button::KeyD));
        assert!(demo.camera().elevation() < 0.0);
    }

    #[test]
    fn space_toggles_arrangement_but_not_on_repeat() {
        let mut demo = LitCubeDemo::new(&DemoConfig::default());
        demo.handle_key(press(Button::Space));
        assert!(demo.arrangement().is_enabled());
        demo.handle_key(KeyInput {
            repeat: true,
            ..press(Button::Space)
        });
        assert!(demo.arrangement().is_enabled());
    }

    #[test]
    fn face_color_edit_queues_one_mesh_update() {
        let mut demo = LitCubeDemo::new(&DemoConfig::default());
        assert!(demo.take_mesh_updates().is_empty());

        demo.set_face_color(Face::Back, [0.5, 0.5, 0.5, 1.0]);
        let updates = demo.take_mesh_updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, CUBE);
        assert!(updates[0]
            .1
            .vertices
            .iter()
            .any(|v| v.color == [0.5, 0.5, 0.5, 1.0]));
        assert!(demo.take_mesh_updates().is_empty());
    }
}
