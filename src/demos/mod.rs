mod catch;
mod lit_cube;
mod rubik;

use crate::cli::DemoKind;
use crate::config::DemoConfig;
use crate::core::{Controller, FrameInfo, KeyInput};
use crate::mesh::MeshData;
use crate::scene::{FrameDescription, MeshId};

pub use catch::CatchDemo;
pub use lit_cube::LitCubeDemo;
pub use rubik::{RubikDemo, RubikVariant};

/// One runnable demo: owns its camera, animation and scene state.
///
/// The host calls `handle_key` for every key transition, then once per tick
/// `update` followed by `frame` (and `ui` while the overlay is enabled).
pub trait Demo {
    fn title(&self) -> &'static str;

    /// Meshes to upload at startup. `MeshId(i)` refers to the i-th entry.
    fn meshes(&self) -> Vec<MeshData>;

    fn handle_key(&mut self, input: KeyInput);

    fn update(&mut self, frame: &FrameInfo, controller: &dyn Controller);

    fn frame(&self, aspect: f32) -> FrameDescription;

    /// Draw the parameter panel. Demos without one leave this empty.
    fn ui(&mut self, _ctx: &egui::Context) {}

    /// Meshes whose contents changed since the last call
    fn take_mesh_updates(&mut self) -> Vec<(MeshId, MeshData)> {
        Vec::new()
    }
}

/// Build the demo selected on the command line.
///
/// `falling_mesh` replaces the catch demo's default sphere.
pub fn create_demo(
    kind: DemoKind,
    config: &DemoConfig,
    falling_mesh: Option<MeshData>,
) -> Box<dyn Demo> {
    log::info!("Creating demo: {:?}", kind);
    match kind {
        DemoKind::LitCube => Box::new(LitCubeDemo::new(config)),
        DemoKind::Rubik => Box::new(RubikDemo::new(RubikVariant::Lit, config)),
        DemoKind::RubikFlat => Box::new(RubikDemo::new(RubikVariant::Flat, config)),
        DemoKind::Catch => Box::new(CatchDemo::new(config, falling_mesh)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_draw_refers_to_an_uploaded_mesh() {
        let config = DemoConfig::default();
        for kind in [
            DemoKind::LitCube,
            DemoKind::Rubik,
            DemoKind::RubikFlat,
            DemoKind::Catch,
        ] {
            let demo = create_demo(kind, &config, None);
            let mesh_count = demo.meshes().len();
            let frame = demo.frame(4.0 / 3.0);
            assert!(!frame.draws.is_empty(), "{kind:?} draws nothing");
            for draw in &frame.draws {
                assert!(draw.mesh.0 < mesh_count, "{kind:?} draws missing mesh");
            }
        }
    }
}
